use crate::compat::{String, Vec};
use crate::error::{ParseError, Result};
use crate::helpers::split_pairs;
use crate::parameter::{Parameter, base_name, is_param_multiple};
use crate::percent_encode::{decode_component, decode_component_lossy};
use crate::url_search_params::{UrlSearchParams, params_to_search_params};

/// Get the parameters whose name matches `param_name` with its `[]` marker stripped.
pub fn params_by_name<'a>(param_name: &str, params: &'a [Parameter]) -> Vec<&'a Parameter> {
    let key = base_name(param_name);
    params.iter().filter(|param| param.name() == key).collect()
}

/// Find a parameter by exact name and value.
pub fn find_param(param_name: &str, param_value: &str, params: &[Parameter]) -> Option<usize> {
    params
        .iter()
        .position(|param| param.matches(param_name, param_value))
}

/// Add a parameter, replacing an identical one in place.
///
/// A multiple-values name always appends a new value. A single-valued name is
/// only appended when no entry with that name exists yet; when one does, the
/// existing value is kept and `new_param` is dropped.
pub fn add_param(new_param: Parameter, params: &mut Vec<Parameter>) {
    if let Some(ind) = find_param(new_param.name(), new_param.value(), params) {
        params[ind] = new_param;
        return;
    }

    if is_param_multiple(new_param.name()) {
        params.push(new_param);
        return;
    }

    if params_by_name(new_param.name(), params).is_empty() {
        params.push(new_param);
    }
}

/// Remove the first parameter matching both name and value, if any.
pub fn remove_param(old_param: &Parameter, params: &mut Vec<Parameter>) {
    if let Some(ind) = find_param(old_param.name(), old_param.value(), params) {
        params.remove(ind);
    }
}

/// Ordered list of query parameters held by the search state.
///
/// The type itself accepts anything; the single-value and no-duplicate rules
/// are applied by [`ParameterList::add`] and the reducer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ParameterList {
    params: Vec<Parameter>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    /// Every pair is kept in order, duplicates included.
    /// Invalid UTF-8 is replaced with U+FFFD.
    pub fn parse(query: &str) -> Self {
        split_pairs(query)
            .into_iter()
            .map(|(name, value)| {
                Parameter::new(decode_component_lossy(name), decode_component_lossy(value))
            })
            .collect()
    }

    /// Like [`ParameterList::parse`], but rejects percent-encoded bytes that
    /// are not valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPercentEncoding`] when a decoded name or
    /// value is not valid UTF-8.
    pub fn parse_strict(query: &str) -> Result<Self> {
        split_pairs(query)
            .into_iter()
            .map(|(name, value)| {
                let name = decode_component(name)?;
                let value = decode_component(value)?;
                Ok::<_, ParseError>(Parameter::new(name, value))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    pub fn as_slice(&self) -> &[Parameter] {
        &self.params
    }

    pub fn into_vec(self) -> Vec<Parameter> {
        self.params
    }

    pub fn get(&self, index: usize) -> Option<&Parameter> {
        self.params.get(index)
    }

    pub fn contains(&self, param: &Parameter) -> bool {
        self.params.contains(param)
    }

    pub fn find(&self, name: &str, value: &str) -> Option<usize> {
        find_param(name, value, &self.params)
    }

    pub fn by_name(&self, name: &str) -> Vec<&Parameter> {
        params_by_name(name, &self.params)
    }

    /// See [`add_param`].
    pub fn add(&mut self, param: Parameter) {
        add_param(param, &mut self.params);
    }

    /// See [`remove_param`].
    pub fn remove(&mut self, param: &Parameter) {
        remove_param(param, &mut self.params);
    }

    pub fn to_search_params(&self) -> UrlSearchParams {
        params_to_search_params(&self.params)
    }

    /// Encoded query string without leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_search_params().to_string()
    }

    /// Encoded query string with leading `?`, or empty string if no parameters.
    pub fn search(&self) -> String {
        self.to_search_params().serialize()
    }
}

impl core::fmt::Display for ParameterList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl From<Vec<Parameter>> for ParameterList {
    fn from(params: Vec<Parameter>) -> Self {
        Self { params }
    }
}

impl From<&str> for ParameterList {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl FromIterator<Parameter> for ParameterList {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl Extend<Parameter> for ParameterList {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        self.params.extend(iter);
    }
}

impl IntoIterator for ParameterList {
    type Item = Parameter;
    type IntoIter = crate::compat::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = core::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
