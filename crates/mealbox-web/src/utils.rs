use std::rc::Rc;

use futures::{
    future::{abortable, AbortHandle},
    Future,
};
use futures_signals::signal::{Mutable, Signal};
use mealbox_lib::{
    error::{Error, Result},
    favorites::Favorites,
    sequence::{RequestSequence, Ticket},
    storage::KeyValueStore,
    DEFAULT_API_URL,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Storage, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static LOCAL_STORAGE: Storage = WINDOW.with(|w| w.local_storage().unwrap_throw().unwrap_throw());
    static API_HOST: std::cell::RefCell<String> = std::cell::RefCell::new(DEFAULT_API_URL.to_string());
}

struct AsyncState {
    ticket: Ticket,
    handle: AbortHandle,
}

/// Runs one load at a time for a render target.
///
/// Starting a load aborts the previous one, and a result is only applied
/// while its ticket is still the latest issued.
pub struct AsyncLoader {
    loading: Mutable<Option<AsyncState>>,
    sequence: Rc<RequestSequence>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading: Mutable::new(None),
            sequence: Rc::new(RequestSequence::new()),
        }
    }

    fn replace(&self, value: Option<AsyncState>) {
        let mut loading = self.loading.lock_mut();
        if let Some(state) = loading.as_mut() {
            state.handle.abort();
        }
        *loading = value;
    }

    pub fn load<T, F, A>(&self, fut: F, apply: A)
    where
        T: 'static,
        F: Future<Output = T> + 'static,
        A: FnOnce(T) + 'static,
    {
        let (fut, handle) = abortable(fut);

        let ticket = self.sequence.issue();
        self.replace(Some(AsyncState { ticket, handle }));

        let loading = self.loading.clone();
        let sequence = self.sequence.clone();

        spawn_local(async move {
            match fut.await {
                Ok(value) if sequence.is_current(ticket) => {
                    {
                        let mut loading = loading.lock_mut();
                        if loading.as_ref().map(|state| state.ticket) == Some(ticket) {
                            *loading = None;
                        }
                    }

                    apply(value);
                }
                Ok(_) => {
                    debug!("dropping stale response {:?}", ticket);
                }
                Err(_) => {
                    debug!("load {:?} aborted", ticket);
                }
            }
        });
    }

    pub fn is_loading(&self) -> impl Signal<Item = bool> + use<> {
        self.loading.signal_ref(|x| x.is_some())
    }
}

/// Browser `localStorage` as a [`KeyValueStore`]
#[derive(Clone)]
pub struct LocalStorage(Storage);

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.0.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.0.remove_item(key).map_err(storage_error)
    }
}

fn storage_error(e: JsValue) -> Error {
    Error::Storage(format!("{:?}", e))
}

pub fn favorites() -> Favorites<LocalStorage> {
    Favorites::new(LocalStorage(local_storage()))
}

pub fn initialize_favorites() {
    let favorites = favorites();
    if let Err(e) = favorites.ensure_initialized() {
        error!("failed to initialize favorites: {}", e);
        return;
    }

    if let Err(Error::CorruptFavorites(e)) = favorites.get_all() {
        warn!("favorites list is unreadable, resetting: {}", e);
        if let Err(e) = favorites.clear() {
            error!("failed to reset favorites: {}", e);
        }
    }
}

pub fn initialize_urls() {
    let api_host = match js_sys::eval("window.__MEALBOX_API__") {
        Ok(val) => val.as_string(),
        Err(_) => None,
    }
    .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    info!("using api at {}", api_host);
    API_HOST.with(|s| *s.borrow_mut() = api_host);
}

pub fn api_host() -> String {
    API_HOST.with(|v| v.borrow().clone())
}

pub fn local_storage() -> Storage {
    LOCAL_STORAGE.with(|s| s.clone())
}
