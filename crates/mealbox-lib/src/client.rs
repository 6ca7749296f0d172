use std::future::Future;

use log::debug;

use crate::{
    error::Result,
    models::{Meal, MealId, MealsResponse},
    DEFAULT_API_URL,
};

/// Recipe lookups needed by the views
pub trait MealApi {
    /// Meals whose name matches `term`, `None` when nothing matches
    fn search(&self, term: &str) -> impl Future<Output = Result<Option<Vec<Meal>>>>;

    /// The meal with the given id
    fn lookup(&self, id: &MealId) -> impl Future<Output = Result<Meal>>;
}

/// Client for the TheMealDB json api
#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Issues a single GET against `endpoint` and decodes the meals envelope.
    pub async fn fetch_by_query(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<MealsResponse> {
        let url = self.endpoint_url(endpoint);
        debug!("GET {} {:?}", url, params);

        let res = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        let body = res.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}

impl MealApi for MealDbClient {
    async fn search(&self, term: &str) -> Result<Option<Vec<Meal>>> {
        let data = self.fetch_by_query("search.php", &[("s", term)]).await?;
        Ok(data.meals)
    }

    async fn lookup(&self, id: &MealId) -> Result<Meal> {
        let data = self
            .fetch_by_query("lookup.php", &[("i", id.as_str())])
            .await?;
        data.into_first(id)
    }
}
