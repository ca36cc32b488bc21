use crate::compat::String;

/// Suffix marking a parameter name that accepts multiple values
pub const MULTIPLE_SUFFIX: &str = "[]";

/// Check if a parameter name accepts multiple values (ends with `[]`)
pub fn is_param_multiple(name: &str) -> bool {
    name.ends_with(MULTIPLE_SUFFIX)
}

/// Strip one trailing `[]` from a parameter name
pub fn base_name(name: &str) -> &str {
    name.strip_suffix(MULTIPLE_SUFFIX).unwrap_or(name)
}

/// A single query parameter.
/// Two parameters are equal when both name and value are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check if this parameter's name accepts multiple values
    pub fn is_multiple(&self) -> bool {
        is_param_multiple(&self.name)
    }

    /// Name without the trailing `[]` marker
    pub fn base_name(&self) -> &str {
        base_name(&self.name)
    }

    /// Check for an exact `(name, value)` match
    pub fn matches(&self, name: &str, value: &str) -> bool {
        self.name == name && self.value == value
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Parameter {
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, value)
    }
}
