//! Ordered query parameter set with last-write-wins `set`.

use std::collections::BTreeMap;
use url::form_urlencoded;
use url::Url;

/// Query parameters keyed by name, kept sorted so serialization is stable.
///
/// A name may carry several values when the source URL repeated it; `set`
/// collapses it to exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the (decoded) query pairs of `url`, preserving repeated values in order.
    pub fn from_url(url: &Url) -> Self {
        let mut out = Self::new();
        for (k, v) in url.query_pairs() {
            out.params
                .entry(k.into_owned())
                .or_default()
                .push(v.into_owned());
        }
        out
    }

    /// First value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces every value of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), vec![value.into()]);
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.params.remove(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Serializes as `application/x-www-form-urlencoded`, sorted by name.
    ///
    /// Space becomes `+`; alphanumerics and `*-._` stay literal; every other
    /// byte is `%XX` with upper-case hex.
    pub fn encode(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.iter() {
            ser.append_pair(k, v);
        }
        ser.finish()
    }
}
