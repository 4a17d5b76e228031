use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error};

/// User agent sent with every Steam store request.
static USER_AGENT: &str = "GameHub/0.1 (+https://github.com/gamehub-order/gamehub)";

/// Build and configure the Steam store client
pub fn build_steam_client(config: &Config) -> Result<steam::Client, Error> {
    let mut builder = steam::Client::builder().user_agent(USER_AGENT);

    // Overridable for local development against a stub store
    if let Some(url) = &config.steam_api_url {
        builder = builder.base_url(url);
    }

    let steam_client = builder.build()?;

    Ok(steam_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
