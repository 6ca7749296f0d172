use std::rc::Rc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::Mutable;
use mealbox_lib::{
    models::MealId,
    view::{details_button_id, favorite_button_id, MealCard},
};

use crate::app::App;

/// A rendered card; the heart follows `is_favorite` only.
pub struct MealCardView {
    card: MealCard,
    pub is_favorite: Mutable<bool>,
}

impl MealCardView {
    pub fn new(card: MealCard) -> Rc<Self> {
        let is_favorite = Mutable::new(card.is_favorite);
        Rc::new(Self { card, is_favorite })
    }

    pub fn id(&self) -> &MealId {
        &self.card.id
    }

    pub fn render(this: Rc<Self>, app: Rc<App>) -> Dom {
        html!("div", {
            .class(["card", "mb-3"])
            .style("width", "20rem")
            .children(&mut [
                html!("img", {
                    .class("card-img-top")
                    .attr("src", &this.card.thumbnail)
                    .attr("alt", &this.card.name)
                    .attr("loading", "lazy")
                }),
                html!("div", {
                    .class("card-body")
                    .children(&mut [
                        html!("h5", {
                            .class("card-title")
                            .text(&this.card.name)
                        }),
                        html!("div", {
                            .class(["d-flex", "justify-content-between", "mt-5"])
                            .children(&mut [
                                html!("button", {
                                    .attr("id", &details_button_id(this.id()))
                                    .attr("type", "button")
                                    .class(["btn", "btn-outline-light"])
                                    .text("More Details")
                                    .event(clone!(app, this => move |_: events::Click| {
                                        App::show_details(app.clone(), this.id().clone());
                                    }))
                                }),
                                html!("button", {
                                    .attr("id", &favorite_button_id(this.id()))
                                    .attr("type", "button")
                                    .class(["btn", "btn-outline-light", "favorite-btn"])
                                    .class_signal("active", this.is_favorite.signal())
                                    .style("border-radius", "50%")
                                    .event(clone!(app, this => move |_: events::Click| {
                                        App::toggle_favorite(app.clone(), this.id().clone());
                                    }))
                                    .children(&mut [
                                        html!("i", {
                                            .class(["fa-solid", "fa-heart"])
                                        })
                                    ])
                                }),
                            ])
                        })
                    ])
                })
            ])
        })
    }
}
