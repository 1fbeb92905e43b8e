//! Light/dark page theme, persisted under a single storage key.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored in local storage and in the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Button text, which names the theme a click switches to.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(Error::Storage(format!("unknown theme value {other:?}"))),
        }
    }
}

/// String key-value persistence such as `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Where a theme becomes visible: the document attribute and the toggle
/// button's label.
pub trait ThemeTarget {
    fn apply_theme(&mut self, theme: Theme);
    fn set_toggle_label(&mut self, label: &str);
}

#[derive(Debug)]
pub struct ThemeController<S: KeyValueStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Loads the persisted theme (Light when absent or unreadable) and applies
    /// it to `target`.
    pub fn init(store: S, key: impl Into<String>, target: &mut impl ThemeTarget) -> Self {
        let key = key.into();
        let current = match store.get(&key) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                log::warn!("{e}; falling back to light theme");
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(e) => {
                log::warn!("could not read theme: {e}");
                Theme::Light
            }
        };
        let controller = Self {
            store,
            key,
            current,
        };
        controller.present(target);
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Switches theme, persists it and updates `target`. A failed write is
    /// logged; the page still switches.
    pub fn toggle(&mut self, target: &mut impl ThemeTarget) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.set(&self.key, self.current.as_str()) {
            log::warn!("could not persist theme: {e}");
        }
        self.present(target);
        log::debug!("theme switched to {}", self.current);
        self.current
    }

    fn present(&self, target: &mut impl ThemeTarget) {
        target.apply_theme(self.current);
        target.set_toggle_label(self.current.action_label());
    }
}
