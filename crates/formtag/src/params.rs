//! # Input Parameters
//!
//! Form input as a multimap from parameter name to the ordered values
//! supplied for it. Repeated form fields append; order within one name is
//! preserved and drives positional assignment into sequence fields.

use std::collections::HashMap;

use url::form_urlencoded;

/// Name → ordered values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, Vec<String>>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` string. A leading `?`
    /// is ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    /// Build from a flat map, one value per name.
    pub fn from_single(single: &HashMap<String, String>) -> Self {
        single
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Add one value for `name` after any existing ones.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.entry(name.into()).or_default().push(value.into());
        self
    }

    /// Replace all values for `name`.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.values.insert(name.into(), values)
    }

    /// Values supplied for `name`; empty when absent.
    pub fn get(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `name` was supplied at all.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no names were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over names and their values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl From<HashMap<String, Vec<String>>> for Params {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self { values }
    }
}

impl From<HashMap<String, String>> for Params {
    fn from(single: HashMap<String, String>) -> Self {
        Self {
            values: single.into_iter().map(|(name, value)| (name, vec![value])).collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}
