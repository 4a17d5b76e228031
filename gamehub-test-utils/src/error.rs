use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    SteamError(#[from] steam::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
