use std::rc::Rc;

use dominator::{html, Dom};
use mealbox_lib::models::Meal;

pub struct MealDetail {
    meal: Meal,
}

impl MealDetail {
    pub fn new(meal: Meal) -> Rc<Self> {
        Rc::new(Self { meal })
    }

    fn render_video_link(&self) -> Option<Dom> {
        self.meal.video_url().map(|url| {
            html!("div", {
                .class("text-center")
                .children(&mut [
                    html!("a", {
                        .attr("href", url)
                        .attr("target", "_blank")
                        .attr("rel", "noopener noreferrer")
                        .class(["btn", "btn-danger", "mt-3"])
                        .text("Watch Video")
                    })
                ])
            })
        })
    }

    pub fn render(this: Rc<Self>) -> Dom {
        let meal = &this.meal;

        html!("div", {
            .attr("id", "meal-details")
            .class("mb-5")
            .children(&mut [
                html!("div", {
                    .attr("id", "meal-header")
                    .class(["d-flex", "justify-content-around", "flex-wrap"])
                    .children(&mut [
                        html!("div", {
                            .attr("id", "meal-thumbnail")
                            .children(&mut [
                                html!("img", {
                                    .class("mb-2")
                                    .attr("src", meal.thumbnail())
                                    .attr("alt", &meal.name)
                                })
                            ])
                        }),
                        html!("div", {
                            .attr("id", "details")
                            .children(&mut [
                                html!("h3", {
                                    .text(&meal.name)
                                }),
                                html!("h6", {
                                    .text(format!("Category : {}", meal.category()).as_str())
                                }),
                                html!("h6", {
                                    .text(format!("Area : {}", meal.area()).as_str())
                                }),
                            ])
                        }),
                    ])
                }),
                html!("div", {
                    .attr("id", "meal-instruction")
                    .class("mt-3")
                    .children(&mut [
                        html!("h5", {
                            .class("text-center")
                            .text("Instruction :")
                        }),
                        html!("p", {
                            .text(meal.instructions())
                        }),
                    ])
                }),
            ])
            .children(this.render_video_link())
        })
    }
}
