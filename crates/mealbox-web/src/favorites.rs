use std::rc::Rc;

use dominator::{clone, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use mealbox_lib::{
    error::Result,
    view::{FavoritesOutcome, NO_FAVORITES_MESSAGE},
};

use crate::{
    app::App,
    common::{snackbar, MealCardView, Spinner},
    query,
    utils::AsyncLoader,
};

/// The favorites container, refetched whenever the list changes
pub struct FavoriteList {
    cards: MutableVec<Rc<MealCardView>>,
    is_empty: Mutable<bool>,
    loader: AsyncLoader,
}

impl FavoriteList {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            cards: MutableVec::new(),
            is_empty: Mutable::new(false),
            loader: AsyncLoader::new(),
        })
    }

    pub fn fetch(this: Rc<Self>) {
        this.loader.load(
            query::fetch_favorite_meals(),
            clone!(this => move |result: Result<FavoritesOutcome>| match result {
                Ok(FavoritesOutcome::Empty) => {
                    this.cards.lock_mut().clear();
                    this.is_empty.set_neq(true);
                }
                Ok(FavoritesOutcome::Meals(cards)) => {
                    this.cards
                        .lock_mut()
                        .replace_cloned(cards.into_iter().map(MealCardView::new).collect());
                    this.is_empty.set_neq(false);
                }
                Err(e) => {
                    error!("failed to fetch favorites: {}", e);
                    snackbar::show(format!("failed to fetch favourites: {}", e));
                }
            }),
        );
    }

    pub fn render(this: Rc<Self>, app: Rc<App>) -> Dom {
        Self::fetch(this.clone());

        html!("div", {
            .attr("id", "favourites-body")
            .class(["d-flex", "flex-wrap", "justify-content-around"])
            .children(&mut [
                Spinner::render(this.loader.is_loading()),
            ])
            .child_signal(this.is_empty.signal().map(|is_empty| {
                is_empty.then(|| html!("p", {
                    .text(NO_FAVORITES_MESSAGE)
                }))
            }))
            .children_signal_vec(this.cards.signal_vec_cloned().map(clone!(app => move |card| {
                MealCardView::render(card, app.clone())
            })))
        })
    }
}
