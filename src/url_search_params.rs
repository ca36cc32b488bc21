use crate::compat::{String, ToString, Vec};
use crate::helpers::split_pairs;
use crate::parameter::{Parameter, is_param_multiple};
use crate::parameter_list::ParameterList;
use crate::percent_encode::{decode_component_lossy, encode_component_into};

/// Ordered multimap of query parameters, ready to be rendered into a URL.
/// This is what the parameter store hands to whatever builds the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSearchParams {
    params: Vec<(String, String)>,
}

impl UrlSearchParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        let params = split_pairs(query)
            .into_iter()
            .map(|(key, value)| (decode_component_lossy(key), decode_component_lossy(value)))
            .collect();

        Self { params }
    }

    pub fn append(&mut self, key: &str, value: &str) {
        self.params.push((key.to_string(), value.to_string()));
    }

    /// Delete pairs with the given key.
    /// If `value` is provided, only deletes pairs matching both key and value.
    pub fn delete(&mut self, key: &str, value: Option<&str>) {
        if let Some(val) = value {
            self.params.retain(|(k, v)| k != key || v != val);
        } else {
            self.params.retain(|(k, _)| k != key);
        }
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Check if a key exists, or a specific key-value pair when `value` is given.
    pub fn has(&self, key: &str, value: Option<&str>) -> bool {
        if let Some(val) = value {
            self.params.iter().any(|(k, v)| k == key && v == val)
        } else {
            self.params.iter().any(|(k, _)| k == key)
        }
    }

    /// Set a key to a single value, replacing all existing values for that key.
    /// The first occurrence keeps its position.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found_first = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found_first {
                return false;
            }
            found_first = true;
            *v = value.to_string();
            true
        });
        if !found_first {
            self.params.push((key.to_string(), value.to_string()));
        }
    }

    /// Add one parameter from the store.
    /// Multiple-values names (`[]` suffix) append so every value survives;
    /// any other name is set, so the last entry for it wins.
    pub fn push_param(&mut self, param: &Parameter) {
        if is_param_multiple(param.name()) {
            self.append(param.name(), param.value());
        } else {
            self.set(param.name(), param.value());
        }
    }

    /// Sort parameters by key (stable).
    pub fn sort(&mut self) {
        self.params.sort_by(|a, b| a.0.cmp(&b.0));
    }

    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over all key-value pairs (alias for `iter`).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    /// Convert to query string with leading `?`, or empty string if no parameters.
    pub fn serialize(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let mut result = String::from("?");
        self.write_pairs(&mut result);
        result
    }

    /// Convert to query string without leading `?`.
    #[allow(clippy::inherent_to_string_shadow_display)]
    pub fn to_string(&self) -> String {
        let mut result = String::new();
        self.write_pairs(&mut result);
        result
    }

    fn write_pairs(&self, buffer: &mut String) {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            encode_component_into(buffer, key);
            buffer.push('=');
            encode_component_into(buffer, value);
        }
    }
}

impl core::fmt::Display for UrlSearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_string())
    }
}

impl From<&str> for UrlSearchParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for UrlSearchParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&ParameterList> for UrlSearchParams {
    fn from(params: &ParameterList) -> Self {
        params_to_search_params(params.as_slice())
    }
}

/// Turn a list of parameters into a search query.
pub fn params_to_search_params(params: &[Parameter]) -> UrlSearchParams {
    params.iter().fold(UrlSearchParams::new(), |mut carry, param| {
        carry.push_param(param);
        carry
    })
}
