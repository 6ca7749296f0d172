use dominator::{html, Dom};
use futures_signals::signal::Signal;

pub struct Spinner;

impl Spinner {
    pub fn render<S>(active: S) -> Dom
    where
        S: Signal<Item = bool> + 'static,
    {
        html!("div", {
            .class(["spinner", "text-center", "my-3"])
            .visible_signal(active)
            .children(&mut [
                html!("div", {
                    .class(["spinner-border", "text-light"])
                    .attr("role", "status")
                })
            ])
        })
    }
}
