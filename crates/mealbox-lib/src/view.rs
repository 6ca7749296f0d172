use futures::future::join_all;
use log::warn;

use crate::{
    client::MealApi,
    error::Result,
    favorites::Favorites,
    models::{Meal, MealId},
    storage::KeyValueStore,
};

pub const NO_RESULTS_MESSAGE: &str = "No Meals found.";
pub const NO_FAVORITES_MESSAGE: &str = "Meals added to favourites will be shown here.";

/// Element id of the favorite toggle of a card
pub fn favorite_button_id(id: &MealId) -> String {
    format!("main{}", id)
}

/// Element id of the "more details" button of a card
pub fn details_button_id(id: &MealId) -> String {
    format!("details{}", id)
}

/// Compact summary of a meal as shown in result and favorites lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCard {
    pub id: MealId,
    pub name: String,
    pub thumbnail: String,
    pub is_favorite: bool,
}

impl MealCard {
    pub fn from_meal(meal: &Meal, is_favorite: bool) -> Self {
        Self {
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail: meal.thumbnail().to_string(),
            is_favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Meals(Vec<MealCard>),
    NoResults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesOutcome {
    Empty,
    Meals(Vec<MealCard>),
}

/// Searches by name and marks every result found in the favorites list.
///
/// Favorites are read once the response is in, so a toggle made while the
/// request was pending is reflected.
pub async fn search_meals<A, S>(
    api: &A,
    favorites: &Favorites<S>,
    term: &str,
) -> Result<SearchOutcome>
where
    A: MealApi,
    S: KeyValueStore,
{
    let meals = api.search(term).await?;
    let favorite_ids = favorites.get_all()?;

    let outcome = match meals {
        Some(meals) => SearchOutcome::Meals(
            meals
                .iter()
                .map(|meal| MealCard::from_meal(meal, favorite_ids.contains(&meal.id)))
                .collect(),
        ),
        None => SearchOutcome::NoResults,
    };

    Ok(outcome)
}

pub async fn meal_details<A: MealApi>(api: &A, id: &MealId) -> Result<Meal> {
    api.lookup(id).await
}

/// Looks up every favorite at once, keeping the stored order.
///
/// Ids whose lookup fails are skipped.
pub async fn favorite_meals<A, S>(api: &A, favorites: &Favorites<S>) -> Result<FavoritesOutcome>
where
    A: MealApi,
    S: KeyValueStore,
{
    let ids = favorites.get_all()?;
    if ids.is_empty() {
        return Ok(FavoritesOutcome::Empty);
    }

    let results = join_all(ids.iter().map(|id| api.lookup(id))).await;

    let cards = ids
        .iter()
        .zip(results)
        .filter_map(|(id, result)| match result {
            Ok(meal) => Some(MealCard::from_meal(&meal, true)),
            Err(e) => {
                warn!("failed to fetch favorite meal {}: {}", id, e);
                None
            }
        })
        .collect();

    Ok(FavoritesOutcome::Meals(cards))
}
