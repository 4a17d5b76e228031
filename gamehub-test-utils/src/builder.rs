//! Declarative test builder for test environment setup.
//!
//! Provides the `TestBuilder` API for configuring test environments before
//! execution. The builder pattern allows chaining configuration methods
//! together, with all operations queued and executed during the final
//! `build()` call.

use chrono::NaiveDateTime;
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use steam::model::AppDetails;

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Sets up test environments with database tables, cached-game fixtures, and
/// mock Steam store endpoints. Finalize with `build()` to obtain a
/// [`TestContext`].
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_game_tables: bool,

    // Database fixtures to insert
    cached_games: Vec<(i64, String, NaiveDateTime)>, // (steam_id, name, last_updated)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    app_details_endpoints: Vec<(i64, AppDetails, usize)>, // (app_id, details, expected_requests)
    app_details_not_found: Vec<(i64, usize)>,
    app_details_errors: Vec<(i64, usize, usize)>, // (app_id, status_code, expected_requests)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_game_tables: false,
            cached_games: Vec::new(),
            mock_builders: Vec::new(),
            app_details_endpoints: Vec::new(),
            app_details_not_found: Vec::new(),
            app_details_errors: Vec::new(),
        }
    }

    /// Add the game catalog tables (`game` and `game_cache_status`) to the
    /// test database.
    pub fn with_game_tables(mut self) -> Self {
        self.include_game_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a cached game row with the given `last_updated` timestamp.
    ///
    /// Only creates the database record; no mock HTTP endpoint is set up.
    pub fn with_cached_game(
        mut self,
        steam_id: i64,
        name: &str,
        last_updated: NaiveDateTime,
    ) -> Self {
        self.cached_games
            .push((steam_id, name.to_string(), last_updated));
        self
    }

    /// Add a mock `appdetails` endpoint returning a successful envelope for
    /// the given app id.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn with_app_details_endpoint(
        mut self,
        app_id: i64,
        details: AppDetails,
        expected_requests: usize,
    ) -> Self {
        self.app_details_endpoints
            .push((app_id, details, expected_requests));
        self
    }

    /// Add a mock `appdetails` endpoint returning `success: false` for the
    /// given app id.
    pub fn with_app_details_not_found(mut self, app_id: i64, expected_requests: usize) -> Self {
        self.app_details_not_found.push((app_id, expected_requests));
        self
    }

    /// Add a mock `appdetails` endpoint returning an HTTP error status for
    /// the given app id.
    pub fn with_app_details_error(
        mut self,
        app_id: i64,
        status_code: usize,
        expected_requests: usize,
    ) -> Self {
        self.app_details_errors
            .push((app_id, status_code, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context: create tables, insert fixtures, register
    /// mock endpoints.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_game_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Game),
                schema.create_table_from_entity(entity::prelude::GameCacheStatus),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (steam_id, name, last_updated) in self.cached_games {
            setup
                .game()
                .insert_cached_game(steam_id, &name, last_updated)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first to allow proper sequential
        // mockito matching when tests stack multiple mocks on the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (app_id, details, expected) in self.app_details_endpoints {
            mocks.push(
                setup
                    .game()
                    .create_app_details_endpoint(app_id, details, expected),
            );
        }

        for (app_id, expected) in self.app_details_not_found {
            mocks.push(setup.game().create_app_details_not_found(app_id, expected));
        }

        for (app_id, status_code, expected) in self.app_details_errors {
            mocks.push(
                setup
                    .game()
                    .create_app_details_error(app_id, status_code, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
