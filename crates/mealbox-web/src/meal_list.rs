use std::rc::Rc;

use dominator::{html, Dom};
use mealbox_lib::{models::MealId, view::MealCard};

use crate::{app::App, common::MealCardView};

/// Search results shown in the main container
pub struct MealList {
    cards: Vec<Rc<MealCardView>>,
}

impl MealList {
    pub fn new(cards: Vec<MealCard>) -> Rc<Self> {
        Rc::new(Self {
            cards: cards.into_iter().map(MealCardView::new).collect(),
        })
    }

    /// Re-derives every card's heart from the stored favorites.
    pub fn refresh_favorites(&self, favorite_ids: &[MealId]) {
        for card in self.cards.iter() {
            card.is_favorite.set_neq(favorite_ids.contains(card.id()));
        }
    }

    pub fn render(this: Rc<Self>, app: Rc<App>) -> Dom {
        html!("div", {
            .class(["d-flex", "flex-wrap", "justify-content-around"])
            .children(this.cards.iter().map(|card| MealCardView::render(card.clone(), app.clone())))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn card(id: &str, is_favorite: bool) -> MealCard {
        MealCard {
            id: MealId::from(id),
            name: format!("meal {}", id),
            thumbnail: String::new(),
            is_favorite,
        }
    }

    #[test]
    fn test_refresh_favorites() {
        let list = MealList::new(vec![card("1", true), card("2", false), card("3", false)]);

        list.refresh_favorites(&[MealId::from("2"), MealId::from("9")]);

        let flags: Vec<bool> = list.cards.iter().map(|card| card.is_favorite.get()).collect();
        assert_eq!(flags, vec![false, true, false]);
    }
}
