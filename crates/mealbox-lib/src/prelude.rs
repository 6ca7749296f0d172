pub use crate::client::{MealApi, MealDbClient};
pub use crate::error::{Error, Result};
pub use crate::favorites::{Favorites, Toggled, FAVORITES_KEY};
pub use crate::models::*;
pub use crate::sequence::{RequestSequence, Ticket};
pub use crate::storage::{KeyValueStore, MemoryStore};
pub use crate::view::*;
pub use crate::DEFAULT_API_URL;
