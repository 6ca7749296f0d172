use serde::{Deserialize, Serialize};

use super::MealId;
use crate::error::{Error, Result};

/// A single recipe as returned by the api
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: MealId,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
}

impl Meal {
    pub fn thumbnail(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or_default()
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn area(&self) -> &str {
        self.area.as_deref().unwrap_or_default()
    }

    pub fn instructions(&self) -> &str {
        self.instructions.as_deref().unwrap_or_default()
    }

    /// Link to the recipe video, `None` when the api has none or an empty string
    pub fn video_url(&self) -> Option<&str> {
        self.youtube.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

/// Envelope shared by the search and lookup endpoints
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

impl MealsResponse {
    /// First meal of a lookup response
    pub fn into_first(self, id: &MealId) -> Result<Meal> {
        self.meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or_else(|| Error::MealNotFound(id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ARRABIATA: &str = r#"{
        "meals": [{
            "idMeal": "52771",
            "strMeal": "Spicy Arrabiata Penne",
            "strDrinkAlternate": null,
            "strCategory": "Vegetarian",
            "strArea": "Italian",
            "strInstructions": "Bring a large pot of water to a boil.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
            "strTags": "Pasta,Curry",
            "strYoutube": "https://www.youtube.com/watch?v=1IszT_guI08"
        }]
    }"#;

    #[test]
    fn test_decode_lookup() {
        let response: MealsResponse = serde_json::from_str(ARRABIATA).unwrap();
        let meal = response.into_first(&MealId::from(52771)).unwrap();

        assert_eq!(meal.id.as_str(), "52771");
        assert_eq!(meal.name, "Spicy Arrabiata Penne");
        assert_eq!(meal.category(), "Vegetarian");
        assert_eq!(meal.area(), "Italian");
        assert_eq!(
            meal.video_url(),
            Some("https://www.youtube.com/watch?v=1IszT_guI08")
        );
    }

    #[test]
    fn test_null_meals_is_not_found() {
        let response: MealsResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.meals.is_none());

        let err = response.into_first(&MealId::from(1)).unwrap_err();
        assert!(matches!(err, Error::MealNotFound(id) if id.as_str() == "1"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let meal: Meal =
            serde_json::from_str(r#"{"idMeal": "1", "strMeal": "Toast", "strYoutube": ""}"#)
                .unwrap();

        assert_eq!(meal.thumbnail(), "");
        assert_eq!(meal.instructions(), "");
        assert_eq!(meal.video_url(), None);
    }
}
