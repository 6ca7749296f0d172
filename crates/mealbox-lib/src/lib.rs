pub mod client;
pub mod error;
pub mod favorites;
pub mod models;
pub mod prelude;
pub mod sequence;
pub mod storage;
pub mod view;

/// Base url of the public TheMealDB v1 api
pub static DEFAULT_API_URL: &str = "https://www.themealdb.com/api/json/v1/1";
