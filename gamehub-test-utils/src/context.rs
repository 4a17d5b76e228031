//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for test
//! execution. The context includes an in-memory SQLite database, a mock Steam
//! store server, and a Steam client configured to use the mock server.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_USER_AGENT, error::TestError, fixtures::game::GameFixtures};

/// Test context structure returned by `TestBuilder`.
///
/// Most tests should create this via [`TestBuilder`](crate::TestBuilder)
/// rather than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_game_tables().build().await?;
///
/// // Access the database and Steam client
/// let db = &test.db;
/// let client = &test.steam_client;
///
/// // Access fixture helpers
/// test.game().insert_cached_game(730, "Counter-Strike 2", Utc::now().naive_utc()).await?;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Steam client configured to use the mock server
    pub steam_client: steam::Client,

    /// Mock HTTP server for Steam store endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert database and Steam client into any type that can be
    /// constructed from them.
    ///
    /// This allows conversion to the server's `AppState` without creating a
    /// circular dependency between the test-utils crate and the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, steam::Client)>,
    {
        T::from((self.db.clone(), self.steam_client.clone()))
    }

    /// Access game fixture helpers bound to this context.
    pub fn game(&mut self) -> GameFixtures<'_> {
        GameFixtures::new(self)
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let steam_client = steam::Client::builder()
            .base_url(&mock_server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            steam_client,
            server: mock_server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
