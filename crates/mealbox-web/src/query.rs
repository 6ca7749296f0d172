use mealbox_lib::{
    client::MealDbClient,
    error::Result,
    models::{Meal, MealId},
    view::{self, FavoritesOutcome, SearchOutcome},
};

use crate::utils::{api_host, favorites};

fn client() -> MealDbClient {
    MealDbClient::new(api_host())
}

pub async fn search_meals(keyword: String) -> Result<SearchOutcome> {
    view::search_meals(&client(), &favorites(), &keyword).await
}

pub async fn fetch_meal_detail(id: MealId) -> Result<Meal> {
    view::meal_details(&client(), &id).await
}

pub async fn fetch_favorite_meals() -> Result<FavoritesOutcome> {
    view::favorite_meals(&client(), &favorites()).await
}
