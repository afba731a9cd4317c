//! Query parameters as an ordered multi-map.
//!
//! [`Query`] maps each parameter name to every value it was given. Keys are
//! kept sorted so that encoding is canonical; values keep the order they were
//! added in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::{form_urlencoded, Url};

/// Query parameters, keyed by name, each with one or more values.
///
/// # Examples
///
/// ```
/// use requrl::Query;
///
/// let mut query = Query::new();
/// query.add("tag", "b");
/// query.add("tag", "a");
/// query.set("page", "2");
///
/// assert_eq!(query.get("tag"), Some("b"));
/// assert_eq!(query.get_all("tag"), ["b", "a"]);
/// assert_eq!(query.encode(), "page=2&tag=b&tag=a");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(BTreeMap<String, Vec<String>>);

impl Query {
    /// Creates an empty `Query`.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Decodes a raw `application/x-www-form-urlencoded` query string.
    ///
    /// Repeated keys collect into one entry. A leading `?` is not stripped.
    pub fn parse(raw: &str) -> Self {
        form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Decodes the query component of `url`. A URL without a query yields an
    /// empty `Query`.
    pub fn from_url(url: &Url) -> Self {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if `key` has at least one value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.first().map(String::as_str)
    }

    /// Returns every value for `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Appends `value` to the values for `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces all values for `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    /// Removes `key`, returning its values if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.remove(key)
    }

    /// Iterates over `(key, values)` in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Encodes the parameters as a query string.
    ///
    /// Keys are sorted and each `key=value` pair is form-urlencoded; a key
    /// with several values produces one pair per value. An empty `Query`
    /// encodes to `""`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.0 {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K, V> Extend<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        query.extend(iter);
        query
    }
}
