//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use crate::error::PageError;
use crate::util::dark_mode::PreferenceStore;

#[derive(Debug)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Open `localStorage`. Private browsing modes may refuse access, in which
    /// case every read is a miss and every write fails.
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {e:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| PageError::Storage("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, value)
            .map_err(|e| PageError::Storage(format!("{e:?}")))
    }
}
