//! Ordered mapping from file keys to display labels

use thiserror::Error;

/// Errors raised while building a word map
#[derive(Debug, Error, PartialEq)]
pub enum WordMapError {
    /// Key is empty or contains characters unsafe in a file name
    #[error("invalid key '{key}': only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidKey { key: String },

    /// Key already present in the map
    #[error("duplicate key '{key}'")]
    DuplicateKey { key: String },
}

/// Words rendered by the binary, in output order
const BUILTIN_WORDS: &[(&str, &str)] = &[
    ("aktivnost", "АКТИВНОСТЬ"),
    ("kalendar", "КАЛЕНДАРЬ"),
    ("pravila", "ПРАВИЛА"),
    ("sostav", "СОСТАВ"),
    ("otchety", "ОТЧЕТЫ"),
    ("fidbek", "ФИДБЕК"),
    ("magaziny", "МАГАЗИНЫ"),
];

/// A single key/label pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// File name stem
    pub key: String,
    /// Text rendered inside the tile
    pub label: String,
}

/// Insertion-ordered map of unique, filesystem-safe keys to labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMap {
    entries: Vec<WordEntry>,
}

impl WordMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// The authoring-time word list
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_WORDS.iter().copied())
            .expect("Built-in words should have unique, valid keys")
    }

    /// Build a map from pairs, keeping their order
    pub fn from_pairs<K, L>(pairs: impl IntoIterator<Item = (K, L)>) -> Result<Self, WordMapError>
    where
        K: Into<String>,
        L: Into<String>,
    {
        let mut map = Self::new();
        for (key, label) in pairs {
            map.insert(key, label)?;
        }
        Ok(map)
    }

    /// Append an entry
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), WordMapError> {
        let key = key.into();
        validate_key(&key)?;
        if self.get(&key).is_some() {
            return Err(WordMapError::DuplicateKey { key });
        }
        self.entries.push(WordEntry {
            key,
            label: label.into(),
        });
        Ok(())
    }

    /// Look up the label for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a WordMap {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Check that a key can be used as a file name stem on any platform
pub fn validate_key(key: &str) -> Result<(), WordMapError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(WordMapError::InvalidKey {
            key: key.to_string(),
        })
    }
}
