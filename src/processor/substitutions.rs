//! Ordered keyword substitution map

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Keyword to replacement-list map that iterates in insertion order.
///
/// Keys are distinct. Inserting an existing keyword replaces its replacements
/// without moving it. Substitutions are applied in iteration order, so a
/// replacement containing a later keyword will itself be substituted.
/// Deserialized entries keep the order they appear in the input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSubstitutions(IndexMap<String, Vec<String>>);

impl KeywordSubstitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyword and its replacements.
    /// Returns the previous replacements if the keyword was already present.
    pub fn insert<K, I, R>(&mut self, keyword: K, replacements: I) -> Option<Vec<String>>
    where
        K: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.0.insert(
            keyword.into(),
            replacements.into_iter().map(Into::into).collect(),
        )
    }

    pub fn get(&self, keyword: &str) -> Option<&[String]> {
        self.0.get(keyword).map(Vec::as_slice)
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keywords and replacements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K, I, R> FromIterator<(K, I)> for KeywordSubstitutions
where
    K: Into<String>,
    I: IntoIterator<Item = R>,
    R: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut substitutions = Self::new();
        for (keyword, replacements) in iter {
            substitutions.insert(keyword, replacements);
        }
        substitutions
    }
}

impl From<IndexMap<String, Vec<String>>> for KeywordSubstitutions {
    fn from(map: IndexMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

impl From<BTreeMap<String, Vec<String>>> for KeywordSubstitutions {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map.into_iter().collect())
    }
}

/// HashMap order is unspecified, so keys are sorted to keep output reproducible
impl From<HashMap<String, Vec<String>>> for KeywordSubstitutions {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        map.into_iter().collect::<BTreeMap<_, _>>().into()
    }
}
