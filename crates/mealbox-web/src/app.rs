use std::rc::Rc;

use dominator::{clone, events, html, with_node, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use mealbox_lib::{
    error::Result,
    models::{Meal, MealId},
    view::{SearchOutcome, NO_RESULTS_MESSAGE},
};
use web_sys::HtmlInputElement;

use crate::{
    common::{snackbar, Spinner},
    favorites::FavoriteList,
    meal_detail::MealDetail,
    meal_list::MealList,
    query,
    utils::{favorites, AsyncLoader},
};

/// What the main container currently shows
#[derive(Clone)]
pub enum MainView {
    Idle,
    Results(Rc<MealList>),
    NoResults,
    Details(Rc<MealDetail>),
}

pub struct App {
    keyword: Mutable<String>,
    main: Mutable<MainView>,
    favorites: Rc<FavoriteList>,
    // shared by search and details, both render into the main container
    loader: AsyncLoader,
}

impl App {
    pub fn new() -> Rc<Self> {
        Rc::new(App {
            keyword: Mutable::new("".to_string()),
            main: Mutable::new(MainView::Idle),
            favorites: FavoriteList::new(),
            loader: AsyncLoader::new(),
        })
    }

    pub fn search(app: Rc<Self>) {
        let keyword = app.keyword.get_cloned();
        app.loader.load(
            query::search_meals(keyword),
            clone!(app => move |result: Result<SearchOutcome>| match result {
                Ok(SearchOutcome::Meals(cards)) => {
                    app.main.set(MainView::Results(MealList::new(cards)));
                }
                Ok(SearchOutcome::NoResults) => {
                    app.main.set(MainView::NoResults);
                }
                Err(e) => {
                    error!("failed to search meals: {}", e);
                    snackbar::show(format!("failed to search meals: {}", e));
                }
            }),
        );
    }

    pub fn show_details(app: Rc<Self>, id: MealId) {
        app.loader.load(
            query::fetch_meal_detail(id),
            clone!(app => move |result: Result<Meal>| match result {
                Ok(meal) => {
                    app.main.set(MainView::Details(MealDetail::new(meal)));
                }
                Err(e) => {
                    error!("failed to fetch meal detail: {}", e);
                    snackbar::show(format!("failed to fetch meal detail: {}", e));
                }
            }),
        );
    }

    pub fn toggle_favorite(app: Rc<Self>, id: MealId) {
        let favorites = favorites();

        let toggled = match favorites.toggle(&id) {
            Ok(toggled) => toggled,
            Err(e) => {
                error!("failed to update favorites: {}", e);
                snackbar::show(format!("failed to update favourites: {}", e));
                return;
            }
        };

        snackbar::show(toggled.message());

        match favorites.get_all() {
            Ok(ids) => {
                if let MainView::Results(list) = &*app.main.lock_ref() {
                    list.refresh_favorites(&ids);
                }
            }
            Err(e) => {
                error!("failed to read favorites: {}", e);
            }
        }

        FavoriteList::fetch(app.favorites.clone());
    }

    fn render_search(app: Rc<Self>) -> Dom {
        html!("div", {
            .class(["d-flex", "justify-content-center", "my-4"])
            .children(&mut [
                html!("input" => HtmlInputElement, {
                    .attr("id", "my-search")
                    .attr("type", "search")
                    .attr("placeholder", "Search meals")
                    .class("form-control")
                    .with_node!(input => {
                        .event(clone!(app => move |_: events::Input| {
                            app.keyword.set_neq(input.value());
                            Self::search(app.clone());
                        }))
                    })
                })
            ])
        })
    }

    fn render_main(app: Rc<Self>) -> Dom {
        html!("div", {
            .attr("id", "main")
            .children(&mut [
                Spinner::render(app.loader.is_loading()),
            ])
            .child_signal(app.main.signal_cloned().map(clone!(app => move |view| {
                match view {
                    MainView::Idle => None,
                    MainView::Results(list) => Some(MealList::render(list, app.clone())),
                    MainView::NoResults => Some(html!("p", {
                        .text(NO_RESULTS_MESSAGE)
                    })),
                    MainView::Details(detail) => Some(MealDetail::render(detail)),
                }
            })))
        })
    }

    pub fn render(app: Rc<Self>) -> Dom {
        html!("div", {
            .class("container")
            .children(&mut [
                Self::render_search(app.clone()),
                Self::render_main(app.clone()),
                html!("h3", {
                    .class(["text-center", "mt-5"])
                    .text("Favourites")
                }),
                FavoriteList::render(app.favorites.clone(), app.clone()),
                snackbar::render(),
            ])
        })
    }
}
