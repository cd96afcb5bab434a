//! Ordered records of class names keyed to conditions.

use crate::bem::Block;

/// A record value. Only its truthiness matters when the record is read as a
/// class map; text values also feed `block`/`element`/`modifier` fields when
/// the record is read as a [`Block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Flag(bool),
    Text(String),
}

impl Value {
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Flag(flag) => *flag,
            Value::Text(text) => !text.is_empty(),
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Flag(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Flag(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

/// Insertion-ordered key/value record.
///
/// Keys are unique: setting an existing key replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap {
    entries: Vec<(String, Value)>,
}

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaining form of [`insert`](Self::insert).
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the record as a block descriptor if it has a truthy `block` entry.
    ///
    /// A non-text `block` (e.g. `true`) still counts, and yields a record with
    /// an empty block name that the formatter will reject.
    pub fn block_record(&self) -> Option<Block> {
        let block = self.get("block").filter(|v| v.is_truthy())?;
        let text_field = |key: &str| self.get(key).and_then(Value::as_text).map(str::to_string);
        Some(Block {
            block: block.as_text().unwrap_or_default().to_string(),
            element: text_field("element"),
            modifier: text_field("modifier"),
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ClassMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ClassMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for ClassMap {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Block> for ClassMap {
    fn from(record: Block) -> Self {
        let mut map = ClassMap::new().set("block", record.block);
        if let Some(element) = record.element {
            map.insert("element", element);
        }
        if let Some(modifier) = record.modifier {
            map.insert("modifier", modifier);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = ClassMap::from([("a", true), ("b", false)]);
        map.insert("a", false);
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Value::Flag(false)));
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::from(true).is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(Value::from("x").is_truthy());
        assert!(!Value::from("").is_truthy());
    }

    #[test]
    fn test_block_record() {
        let map = ClassMap::new().set("block", "foo").set("modifier", "bar");
        assert_eq!(map.block_record(), Some(Block::new("foo").modifier("bar")));

        let falsy = ClassMap::new().set("block", "").set("is-open", true);
        assert_eq!(falsy.block_record(), None);

        let flagged = ClassMap::from([("block", true)]);
        assert_eq!(flagged.block_record(), Some(Block::new("")));
    }

    #[test]
    fn test_from_block_keeps_field_order() {
        let map = ClassMap::from(Block::new("").modifier("m"));
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["block", "modifier"]);
        assert_eq!(map.block_record(), None);
    }
}
