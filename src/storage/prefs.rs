//! Display preference store
//!
//! A flat string-to-string key-value map persisted as one JSON file. Holds
//! the three cosmetic values the original app kept in device storage; all
//! values are stored as strings and parsed on read, with hardcoded fallbacks
//! when a key is absent or unparsable.

use std::collections::BTreeMap;

use crate::config::paths::SakuPaths;
use crate::error::{SakuError, SakuResult};
use crate::models::Rupiah;

use super::file_io;

/// Key for the home-screen display name
pub const USER_NAME_KEY: &str = "userName";

/// Key for the simulated overseas card balance
pub const CARD_BALANCE_KEY: &str = "cardBalance";

/// Key for the overseas card account name
pub const ACCOUNT_NAME_KEY: &str = "accountName";

/// Fallback card balance when nothing has been saved
pub const DEFAULT_CARD_BALANCE: Rupiah = Rupiah::zero();

/// Fallback overseas account name when nothing has been saved
pub const DEFAULT_ACCOUNT_NAME: &str = "Ozan";

/// The on-disk preference map and its location
#[derive(Debug, Clone)]
pub struct PrefsStore {
    paths: SakuPaths,
    values: BTreeMap<String, String>,
}

impl PrefsStore {
    /// Load preferences from disk
    ///
    /// A missing file yields an empty map. A corrupt or unreadable file is
    /// logged and treated as empty rather than crashing the app; the next
    /// successful write replaces it.
    pub fn load(paths: &SakuPaths) -> Self {
        let values = match file_io::read_json(paths.prefs_file()) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("warning: could not read preferences: {}", e);
                BTreeMap::new()
            }
        };

        Self {
            paths: paths.clone(),
            values,
        }
    }

    /// Get a raw value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a raw value and persist the whole map
    ///
    /// On write failure the in-memory value is rolled back so reads keep
    /// returning what is actually on disk.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> SakuResult<()> {
        let previous = self.values.insert(key.to_string(), value.into());

        if let Err(e) = file_io::write_json_atomic(self.paths.prefs_file(), &self.values) {
            match previous {
                Some(prev) => {
                    self.values.insert(key.to_string(), prev);
                }
                None => {
                    self.values.remove(key);
                }
            }
            return Err(e);
        }

        Ok(())
    }

    /// The saved display name, if any
    pub fn display_name(&self) -> Option<&str> {
        self.get(USER_NAME_KEY)
    }

    /// Save the display name, trimmed
    ///
    /// Empty or whitespace-only input is rejected and the stored value is
    /// left unchanged.
    pub fn set_display_name(&mut self, name: &str) -> SakuResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SakuError::Validation("Name cannot be empty".into()));
        }
        self.set(USER_NAME_KEY, name)
    }

    /// The overseas account name, falling back to [`DEFAULT_ACCOUNT_NAME`]
    pub fn account_name(&self) -> &str {
        self.get(ACCOUNT_NAME_KEY).unwrap_or(DEFAULT_ACCOUNT_NAME)
    }

    /// Save the overseas account name, trimmed; same validation as the
    /// display name
    pub fn set_account_name(&mut self, name: &str) -> SakuResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SakuError::Validation("Name cannot be empty".into()));
        }
        self.set(ACCOUNT_NAME_KEY, name)
    }

    /// The simulated card balance
    ///
    /// Falls back to [`DEFAULT_CARD_BALANCE`] when the key is absent or the
    /// stored string does not parse as a base-10 integer.
    pub fn card_balance(&self) -> Rupiah {
        self.get(CARD_BALANCE_KEY)
            .and_then(|s| s.parse::<i64>().ok())
            .map(Rupiah::from_units)
            .unwrap_or(DEFAULT_CARD_BALANCE)
    }

    /// Save the simulated card balance from user input
    ///
    /// Rejects non-numeric and negative amounts without touching the stored
    /// value. Stored as the decimal string representation.
    pub fn set_card_balance(&mut self, input: &str) -> SakuResult<Rupiah> {
        let amount = Rupiah::parse(input)
            .map_err(|_| SakuError::Validation(format!("Invalid amount: '{}'", input.trim())))?;

        if amount.is_negative() {
            return Err(SakuError::Validation(
                "Amount cannot be negative".into(),
            ));
        }

        self.set(CARD_BALANCE_KEY, amount.units().to_string())?;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PrefsStore) {
        let temp = TempDir::new().unwrap();
        let paths = SakuPaths::with_base_dir(temp.path().to_path_buf());
        let store = PrefsStore::load(&paths);
        (temp, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_temp, store) = store();
        assert_eq!(store.display_name(), None);
        assert_eq!(store.card_balance(), DEFAULT_CARD_BALANCE);
    }

    #[test]
    fn test_display_name_is_trimmed_and_persisted() {
        let (temp, mut store) = store();
        store.set_display_name("  Budi  ").unwrap();
        assert_eq!(store.display_name(), Some("Budi"));

        // Survives a reload
        let paths = SakuPaths::with_base_dir(temp.path().to_path_buf());
        let reloaded = PrefsStore::load(&paths);
        assert_eq!(reloaded.display_name(), Some("Budi"));
    }

    #[test]
    fn test_blank_display_name_rejected_keeps_previous() {
        let (_temp, mut store) = store();
        store.set_display_name("Budi").unwrap();

        let err = store.set_display_name("   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.display_name(), Some("Budi"));
    }

    #[test]
    fn test_card_balance_round_trip() {
        let (_temp, mut store) = store();
        let saved = store.set_card_balance("12.500.000").unwrap();
        assert_eq!(saved, Rupiah::from_units(12_500_000));
        assert_eq!(store.get(CARD_BALANCE_KEY), Some("12500000"));
        assert_eq!(store.card_balance(), Rupiah::from_units(12_500_000));
    }

    #[test]
    fn test_card_balance_rejects_bad_input() {
        let (_temp, mut store) = store();
        assert!(store.set_card_balance("abc").unwrap_err().is_validation());
        assert!(store.set_card_balance("-500").unwrap_err().is_validation());
        assert_eq!(store.card_balance(), DEFAULT_CARD_BALANCE);
    }

    #[test]
    fn test_unparsable_stored_balance_falls_back() {
        let (_temp, mut store) = store();
        store.set(CARD_BALANCE_KEY, "not-a-number").unwrap();
        assert_eq!(store.card_balance(), DEFAULT_CARD_BALANCE);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let paths = SakuPaths::with_base_dir(temp.path().to_path_buf());
        std::fs::create_dir_all(temp.path()).unwrap();
        std::fs::write(paths.prefs_file(), "{{ not json").unwrap();

        let store = PrefsStore::load(&paths);
        assert_eq!(store.display_name(), None);
    }

    #[test]
    fn test_account_name() {
        let (_temp, mut store) = store();
        assert_eq!(store.account_name(), DEFAULT_ACCOUNT_NAME);
        store.set_account_name(" Wahyu ").unwrap();
        assert_eq!(store.account_name(), "Wahyu");
        assert!(store.set_account_name("").is_err());
    }
}
