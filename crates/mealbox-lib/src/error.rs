use thiserror::Error;

use crate::models::MealId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("favorites list is corrupt: {0}")]
    CorruptFavorites(serde_json::Error),
    #[error("no meal found with id {0}")]
    MealNotFound(MealId),
}

pub type Result<T> = std::result::Result<T, Error>;
