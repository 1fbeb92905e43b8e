use web_sys::{Document, Element, Storage, Window};

use crate::config::{VisualizerConfig, CONFIG_ELEMENT_ID};
use crate::error::{Error, Result};
use crate::theme::{KeyValueStore, Theme, ThemeTarget};

pub(super) fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(format!("#{id}")))
}

pub(super) fn query(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| Error::MissingElement(selector.to_string()))
}

/// Reads the inline JSON config if the page has one.
pub(super) fn load_config(document: &Document) -> Result<VisualizerConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => {
            log::info!("using config from #{CONFIG_ELEMENT_ID}");
            VisualizerConfig::from_json(&json)
        }
        None => Ok(VisualizerConfig::default()),
    }
}

/// `window.localStorage`. When the browser refuses storage, reads come back
/// empty and writes fail.
#[derive(Clone, Debug)]
pub struct LocalStore(Option<Storage>);

impl LocalStore {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self(Some(storage)),
            Ok(None) => {
                log::warn!("local storage unavailable; theme will not persist");
                Self(None)
            }
            Err(e) => {
                log::warn!("local storage denied: {e:?}; theme will not persist");
                Self(None)
            }
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match &self.0 {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| Error::Storage(format!("{e:?}"))),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .0
            .as_ref()
            .ok_or_else(|| Error::Storage("local storage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }
}

/// Applies themes as `data-theme` on the root element and labels the toggle.
#[derive(Clone, Debug)]
pub struct DocumentTheme {
    root: Element,
    button: Element,
}

impl DocumentTheme {
    pub fn new(root: Element, button: Element) -> Self {
        Self { root, button }
    }
}

impl ThemeTarget for DocumentTheme {
    fn apply_theme(&mut self, theme: Theme) {
        if let Err(e) = self.root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("could not set data-theme: {e:?}");
        }
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.button.set_text_content(Some(label));
    }
}
