use std::collections::HashSet;

use log::{debug, info};

use crate::{
    error::{Error, Result},
    models::MealId,
    storage::KeyValueStore,
};

/// Storage key holding the JSON array of favorite meal ids
pub const FAVORITES_KEY: &str = "favouritesList";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

impl Toggled {
    pub fn message(&self) -> &'static str {
        match self {
            Toggled::Added => "Your meal added to your favourites list",
            Toggled::Removed => "Your meal removed from your favourites list",
        }
    }
}

/// Owns the favorites list and its serialization on top of a [`KeyValueStore`].
///
/// The list never holds the same id twice; duplicates found in stored data
/// are dropped on read, keeping the first occurrence.
pub struct Favorites<S> {
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes an empty list if nothing is stored yet.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.store.get(FAVORITES_KEY)?.is_none() {
            debug!("no {} in storage, initializing", FAVORITES_KEY);
            self.store.set(FAVORITES_KEY, "[]")?;
        }

        Ok(())
    }

    pub fn get_all(&self) -> Result<Vec<MealId>> {
        match self.store.get(FAVORITES_KEY)? {
            Some(raw) => {
                let ids: Vec<MealId> =
                    serde_json::from_str(&raw).map_err(Error::CorruptFavorites)?;
                Ok(dedup(ids))
            }
            None => Ok(vec![]),
        }
    }

    pub fn set_all(&self, ids: &[MealId]) -> Result<()> {
        let ids = dedup(ids.to_vec());
        let raw = serde_json::to_string(&ids)?;
        self.store.set(FAVORITES_KEY, &raw)
    }

    pub fn contains(&self, id: &MealId) -> Result<bool> {
        Ok(self.get_all()?.contains(id))
    }

    /// Removes `id` if present, appends it otherwise.
    pub fn toggle(&self, id: &MealId) -> Result<Toggled> {
        let mut ids = self.get_all()?;

        let toggled = if ids.contains(id) {
            ids.retain(|fav| fav != id);
            Toggled::Removed
        } else {
            ids.push(id.clone());
            Toggled::Added
        };

        self.set_all(&ids)?;
        info!("meal {} {:?}", id, toggled);

        Ok(toggled)
    }

    /// Drops whatever is stored, readable or not, and starts over empty.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(FAVORITES_KEY)?;
        self.ensure_initialized()
    }
}

fn dedup(ids: Vec<MealId>) -> Vec<MealId> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with(raw: Option<&str>) -> MemoryStore {
        let store = MemoryStore::new();
        if let Some(raw) = raw {
            store.set(FAVORITES_KEY, raw).unwrap();
        }
        store
    }

    fn raw(store: &MemoryStore) -> Option<String> {
        store.get(FAVORITES_KEY).unwrap()
    }

    #[test]
    fn test_initialize_when_absent() {
        let store = store_with(None);
        let favorites = Favorites::new(&store);
        favorites.ensure_initialized().unwrap();

        assert_eq!(raw(&store).as_deref(), Some("[]"));
        assert!(favorites.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_initialize_keeps_existing() {
        let store = store_with(Some(r#"["52771","52772"]"#));
        let favorites = Favorites::new(&store);
        favorites.ensure_initialized().unwrap();

        assert_eq!(raw(&store).as_deref(), Some(r#"["52771","52772"]"#));
    }

    #[test]
    fn test_toggle_scenario() {
        let store = store_with(None);
        let favorites = Favorites::new(&store);
        favorites.ensure_initialized().unwrap();

        let id = MealId::from(52772);
        assert_eq!(favorites.toggle(&id).unwrap(), Toggled::Added);
        assert_eq!(raw(&store).as_deref(), Some(r#"["52772"]"#));
        assert!(favorites.contains(&id).unwrap());

        assert_eq!(favorites.toggle(&id).unwrap(), Toggled::Removed);
        assert_eq!(raw(&store).as_deref(), Some("[]"));
        assert!(!favorites.contains(&id).unwrap());
    }

    #[test]
    fn test_toggle_twice_keeps_order_of_others() {
        let store = store_with(Some(r#"["3","1","2"]"#));
        let favorites = Favorites::new(&store);
        let before = favorites.get_all().unwrap();

        let id = MealId::from("9");
        favorites.toggle(&id).unwrap();
        assert_eq!(favorites.get_all().unwrap().last(), Some(&id));
        favorites.toggle(&id).unwrap();

        assert_eq!(favorites.get_all().unwrap(), before);
    }

    #[test]
    fn test_toggle_existing_in_middle() {
        let store = store_with(Some(r#"["3","1","2"]"#));
        let favorites = Favorites::new(&store);
        favorites.toggle(&MealId::from("1")).unwrap();

        assert_eq!(raw(&store).as_deref(), Some(r#"["3","2"]"#));
    }

    #[test]
    fn test_set_all_get_all_is_idempotent() {
        let store = store_with(Some(r#"["52771","52772"]"#));
        let favorites = Favorites::new(&store);
        let before = raw(&store);

        favorites.set_all(&favorites.get_all().unwrap()).unwrap();

        assert_eq!(raw(&store), before);
    }

    #[test]
    fn test_numeric_ids_are_normalized() {
        let store = store_with(Some("[52772, 52771]"));
        let favorites = Favorites::new(&store);

        assert!(favorites.contains(&MealId::from("52772")).unwrap());
        assert_eq!(favorites.toggle(&MealId::from("52772")).unwrap(), Toggled::Removed);
        assert_eq!(raw(&store).as_deref(), Some(r#"["52771"]"#));
    }

    #[test]
    fn test_duplicates_dropped() {
        let store = store_with(Some(r#"["1", 2, "2", 1]"#));
        let favorites = Favorites::new(&store);

        assert_eq!(
            favorites.get_all().unwrap(),
            vec![MealId::from(1), MealId::from(2)]
        );
    }

    #[test]
    fn test_corrupt_value() {
        let store = store_with(Some("not json"));
        let favorites = Favorites::new(&store);

        assert!(matches!(
            favorites.get_all(),
            Err(Error::CorruptFavorites(_))
        ));
        assert!(favorites.toggle(&MealId::from(1)).is_err());

        favorites.clear().unwrap();
        assert_eq!(raw(&store).as_deref(), Some("[]"));
        assert!(favorites.get_all().unwrap().is_empty());
    }
}
