//! Scheduler for periodic game cache maintenance tasks.
//!
//! Provides a cron-based job scheduler that refetches cached Steam games
//! once they outlive the freshness window, so catalog data stays current
//! without waiting for a request to hit an expired entry.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{config::CacheConfig, error::Error, service::game::GameCacheService};

pub mod config;

/// Job scheduler for background game cache maintenance.
pub struct Scheduler {
    db: DatabaseConnection,
    steam_client: steam::Client,
    cache: CacheConfig,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    pub async fn new(
        db: DatabaseConnection,
        steam_client: steam::Client,
        cache: CacheConfig,
    ) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            db,
            steam_client,
            cache,
            sched,
        })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// Jobs run according to their cron expressions until the scheduler is
    /// dropped. Currently one job is registered: the expired cache refresh.
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            config::game::CRON_EXPRESSION,
            "expired game cache",
            |db, steam_client, cache| async move {
                let service = GameCacheService::new(&db, &steam_client, cache);
                service.refresh_expired_cache().await
            },
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The job function receives clones of the database connection, Steam
    /// client, and cache configuration, and returns how many entries it
    /// refreshed. Successes are logged at debug level, failures at error.
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, steam::Client, CacheConfig) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let steam_client = self.steam_client.clone();
        let cache = self.cache.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let steam_client = steam_client.clone();
                let cache = cache.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db, steam_client, cache).await {
                        Ok(count) => tracing::debug!("Refreshed {} {} entry(ies)", count, name),
                        Err(e) => tracing::error!("Error refreshing {}: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
