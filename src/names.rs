//! Namespaced class-name maps for a block and its elements.

use crate::bem::{self, Descriptor};
use crate::error::Result;

/// Key of the block's own class in a [`ClassNames`] map.
pub const DEFAULT_KEY: &str = "default";

/// Element name to namespaced class, with the block's class under
/// [`DEFAULT_KEY`]. Entries keep generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    entries: Vec<(String, String)>,
}

impl ClassNames {
    fn with_default(class: String) -> Self {
        Self {
            entries: vec![(DEFAULT_KEY.to_string(), class)],
        }
    }

    // An element literally named `default` replaces the block entry.
    fn insert(&mut self, key: &str, class: String) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = class,
            None => self.entries.push((key.to_string(), class)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, class)| class.as_str())
    }

    /// The block's own class.
    pub fn default_class(&self) -> &str {
        self.get(DEFAULT_KEY).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the class map for `block` and each of `elements`, prefixed with
/// `namespace`.
pub fn generate_class_names<S: AsRef<str>>(
    namespace: &str,
    block: impl Into<Descriptor>,
    elements: &[S],
) -> Result<ClassNames> {
    let block = block.into();
    let mut names = ClassNames::with_default(format!(
        "{namespace}{}",
        bem::format(&block, "", "")?
    ));

    for element in elements {
        let element = element.as_ref();
        let class = format!("{namespace}{}", bem::format(&block, element, "")?);
        names.insert(element, class);
    }

    tracing::debug!(namespace, classes = names.len(), "generated class names");
    Ok(names)
}
