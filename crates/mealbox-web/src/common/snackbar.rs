use std::rc::Rc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use gloo_timers::future::TimeoutFuture;
use mealbox_lib::sequence::{RequestSequence, Ticket};
use wasm_bindgen_futures::spawn_local;

/// How long a message stays up unless dismissed earlier
pub const TOAST_DURATION_MS: u32 = 3000;

thread_local! {
    static SNACKBAR: std::cell::RefCell<Rc<Snackbar>> = std::cell::RefCell::new(Snackbar::new());
}

pub fn show(message: impl Into<String>) {
    SNACKBAR.with(|s| Snackbar::show(s.borrow().clone(), message.into()));
}

pub fn render() -> Dom {
    SNACKBAR.with(|s| Snackbar::render(s.borrow().clone()))
}

/// Single owner of the toast element; callers only ask to show or dismiss.
pub struct Snackbar {
    message: Mutable<Option<String>>,
    shown: RequestSequence,
}

impl Snackbar {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            message: Mutable::new(None),
            shown: RequestSequence::new(),
        })
    }

    pub fn show(snackbar: Rc<Self>, message: String) {
        let ticket = snackbar.present(message);

        spawn_local(clone!(snackbar => async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            snackbar.expire(ticket);
        }));
    }

    fn present(&self, message: String) -> Ticket {
        let ticket = self.shown.issue();
        self.message.set(Some(message));
        ticket
    }

    /// Hides the message only if nothing newer was presented since `ticket`.
    fn expire(&self, ticket: Ticket) {
        if self.shown.is_current(ticket) {
            self.dismiss();
        }
    }

    pub fn dismiss(&self) {
        self.message.set_neq(None);
    }

    pub fn render(snackbar: Rc<Self>) -> Dom {
        html!("div", {
            .class(["toast", "show"])
            .attr("role", "status")
            .visible_signal(snackbar.message.signal_cloned().map(|message| message.is_some()))
            .children(&mut [
                html!("div", {
                    .class(["d-flex", "justify-content-between"])
                    .child_signal(snackbar.message.signal_cloned().map(|message| message.map(|msg| html!("div", {
                            .class("toast-body")
                            .text(msg.as_str())
                        })
                    )))
                    .children(&mut [
                        html!("button", {
                            .class(["btn-close", "me-2", "m-auto"])
                            .attr("type", "button")
                            .attr("aria-label", "Close")
                            .event(clone!(snackbar => move |_: events::Click| snackbar.dismiss()))
                        })
                    ])
                })
            ])
        })
    }
}
