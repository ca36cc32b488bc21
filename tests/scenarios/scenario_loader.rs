/// Scenario loader
///
/// Scenarios are JSON documents: a name, the actions to dispatch in the wire
/// shape a UI host sends, and the expected parameters and query string.
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize, Clone)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<WireAction>,
    pub expected: Vec<WireParam>,
    #[serde(default)]
    pub query: Option<String>,
}

/// `{"type": "...", "param": ...}` where `param` is a parameter or a list
#[derive(Debug, Deserialize, Clone)]
pub struct WireAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub param: Value,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct WireParam {
    pub name: String,
    pub value: String,
}

pub fn load_scenarios(json: &str) -> Vec<Scenario> {
    serde_json::from_str(json).unwrap_or_else(|err| panic!("invalid scenario data: {err}"))
}

/// Inline scenario data
pub const SCENARIOS: &str = r#"[
    {
        "name": "differing single value is dropped",
        "actions": [
            {"type": "ADD_PARAM", "param": {"name": "q", "value": "cats"}},
            {"type": "ADD_PARAM", "param": {"name": "q", "value": "dogs"}}
        ],
        "expected": [{"name": "q", "value": "cats"}],
        "query": "q=cats"
    },
    {
        "name": "identical add is idempotent",
        "actions": [
            {"type": "ADD_PARAM", "param": {"name": "q", "value": "cats"}},
            {"type": "ADD_PARAM", "param": {"name": "q", "value": "cats"}}
        ],
        "expected": [{"name": "q", "value": "cats"}]
    },
    {
        "name": "multiple values keep order and encode every value",
        "actions": [
            {"type": "ADD_PARAM", "param": {"name": "q", "value": "cats"}},
            {"type": "ADD_PARAM", "param": {"name": "tags[]", "value": "a"}},
            {"type": "ADD_PARAM", "param": {"name": "tags[]", "value": "b"}}
        ],
        "expected": [
            {"name": "q", "value": "cats"},
            {"name": "tags[]", "value": "a"},
            {"name": "tags[]", "value": "b"}
        ],
        "query": "q=cats&tags%5B%5D=a&tags%5B%5D=b"
    },
    {
        "name": "remove absent is a no-op",
        "actions": [
            {"type": "ADD_PARAM", "param": {"name": "q", "value": "cats"}},
            {"type": "REMOVE_PARAM", "param": {"name": "q", "value": "dogs"}}
        ],
        "expected": [{"name": "q", "value": "cats"}]
    },
    {
        "name": "remove exact match",
        "actions": [
            {"type": "ADD_PARAM", "param": {"name": "tags[]", "value": "a"}},
            {"type": "ADD_PARAM", "param": {"name": "tags[]", "value": "b"}},
            {"type": "REMOVE_PARAM", "param": {"name": "tags[]", "value": "a"}}
        ],
        "expected": [{"name": "tags[]", "value": "b"}],
        "query": "tags%5B%5D=b"
    },
    {
        "name": "set replaces everything",
        "actions": [
            {"type": "ADD_PARAM", "param": {"name": "q", "value": "cats"}},
            {"type": "SET_PARAMS", "param": [
                {"name": "page", "value": "2"},
                {"name": "sort", "value": "title asc"}
            ]}
        ],
        "expected": [
            {"name": "page", "value": "2"},
            {"name": "sort", "value": "title asc"}
        ],
        "query": "page=2&sort=title+asc"
    },
    {
        "name": "unknown type is ignored",
        "actions": [
            {"type": "ADD_PARAM", "param": {"name": "q", "value": "cats"}},
            {"type": "NOOP", "param": {"name": "x", "value": "y"}}
        ],
        "expected": [{"name": "q", "value": "cats"}]
    },
    {
        "name": "set with a single parameter is ignored",
        "actions": [
            {"type": "ADD_PARAM", "param": {"name": "q", "value": "cats"}},
            {"type": "SET_PARAMS", "param": {"name": "x", "value": "y"}}
        ],
        "expected": [{"name": "q", "value": "cats"}]
    },
    {
        "name": "empty state encodes to nothing",
        "expected": [],
        "query": ""
    }
]"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_inline_scenarios() {
        let scenarios = load_scenarios(SCENARIOS);
        assert_eq!(scenarios.len(), 9);
        assert!(scenarios.iter().all(|s| !s.name.is_empty()));
    }
}
