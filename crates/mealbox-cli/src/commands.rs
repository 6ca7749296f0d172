use anyhow::Context;
use mealbox_lib::prelude::*;

use crate::store::FileStore;

pub async fn search(
    client: &MealDbClient,
    favorites: &Favorites<FileStore>,
    term: &str,
) -> anyhow::Result<()> {
    let outcome = search_meals(client, favorites, term)
        .await
        .with_context(|| format!("failed to search meals for {:?}", term))?;

    match outcome {
        SearchOutcome::Meals(cards) => {
            for card in cards.iter() {
                println!("{}", format_card(card));
            }
        }
        SearchOutcome::NoResults => println!("{}", NO_RESULTS_MESSAGE),
    }

    Ok(())
}

pub async fn show(
    client: &MealDbClient,
    favorites: &Favorites<FileStore>,
    id: &MealId,
) -> anyhow::Result<()> {
    let meal = meal_details(client, id)
        .await
        .with_context(|| format!("failed to fetch meal {}", id))?;
    let is_favorite = favorites.contains(&meal.id)?;

    println!("{}", format_details(&meal, is_favorite));

    Ok(())
}

pub async fn list_favorites(
    client: &MealDbClient,
    favorites: &Favorites<FileStore>,
) -> anyhow::Result<()> {
    match favorite_meals(client, favorites).await? {
        FavoritesOutcome::Empty => println!("{}", NO_FAVORITES_MESSAGE),
        FavoritesOutcome::Meals(cards) => {
            for card in cards.iter() {
                println!("{}", format_card(card));
            }
        }
    }

    Ok(())
}

pub fn toggle_favorite(favorites: &Favorites<FileStore>, id: &MealId) -> anyhow::Result<()> {
    let toggled = favorites
        .toggle(id)
        .with_context(|| format!("failed to toggle favourite {}", id))?;

    println!("{}", toggled.message());

    Ok(())
}

pub fn clear_favorites(favorites: &Favorites<FileStore>) -> anyhow::Result<()> {
    favorites.clear()?;
    println!("Your favourites list is now empty");

    Ok(())
}

pub fn format_card(card: &MealCard) -> String {
    let marker = if card.is_favorite { '*' } else { ' ' };
    format!("{} {:>6}  {}", marker, card.id, card.name)
}

pub fn format_details(meal: &Meal, is_favorite: bool) -> String {
    let title = if is_favorite {
        format!("{} *", meal.name)
    } else {
        meal.name.clone()
    };

    let mut lines = vec![
        title,
        format!("Category : {}", meal.category()),
        format!("Area : {}", meal.area()),
        String::new(),
        "Instruction :".to_string(),
        meal.instructions().to_string(),
    ];

    if let Some(url) = meal.video_url() {
        lines.push(String::new());
        lines.push(format!("Watch Video: {}", url));
    }

    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_card() {
        let card = MealCard {
            id: MealId::from("52771"),
            name: "Spicy Arrabiata Penne".to_string(),
            thumbnail: String::new(),
            is_favorite: true,
        };

        assert_eq!(format_card(&card), "*  52771  Spicy Arrabiata Penne");
    }

    #[test]
    fn test_format_details() {
        let meal = Meal {
            id: MealId::from("52771"),
            name: "Spicy Arrabiata Penne".to_string(),
            thumbnail: None,
            category: Some("Vegetarian".to_string()),
            area: Some("Italian".to_string()),
            instructions: Some("Boil water.".to_string()),
            youtube: None,
        };

        let details = format_details(&meal, false);

        assert!(details.starts_with("Spicy Arrabiata Penne\nCategory : Vegetarian\nArea : Italian"));
        assert!(details.ends_with("Boil water."));
        assert!(!details.contains("Watch Video"));

        let favorite = format_details(&meal, true);
        assert!(favorite.starts_with("Spicy Arrabiata Penne *\n"));
    }
}
