use crate::compat::String;
use crate::error::{ParseError, Result};
use crate::parameter::Parameter;
use crate::parameter_list::ParameterList;

/// Advanced search state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub params: ParameterList,
}

impl State {
    pub fn new(params: ParameterList) -> Self {
        Self { params }
    }

    /// Encoded query string for the current parameters (no leading `?`)
    pub fn query_string(&self) -> String {
        self.params.to_query_string()
    }
}

/// State a host seeds its container with: no parameters.
pub fn initial_state() -> State {
    State::default()
}

/// A state transition for the advanced search parameters.
///
/// With the `serde` feature this uses the wire shape
/// `{"type": "ADD_PARAM", "param": {"name": "q", "value": "cats"}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "param")
)]
pub enum Action {
    /// Insert a parameter, or replace an identical one in place
    #[cfg_attr(feature = "serde", serde(rename = "ADD_PARAM"))]
    Add(Parameter),
    /// Remove the parameter with this exact name and value
    #[cfg_attr(feature = "serde", serde(rename = "REMOVE_PARAM"))]
    Remove(Parameter),
    /// Replace the whole list, unvalidated
    #[cfg_attr(feature = "serde", serde(rename = "SET_PARAMS"))]
    Set(ParameterList),
}

/// Payload carried next to a loosely-typed action kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Param(Parameter),
    List(ParameterList),
}

impl From<Parameter> for Payload {
    fn from(param: Parameter) -> Self {
        Self::Param(param)
    }
}

impl From<ParameterList> for Payload {
    fn from(params: ParameterList) -> Self {
        Self::List(params)
    }
}

/// Action kinds, named by their wire type strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Add,
    Remove,
    Set,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD_PARAM",
            Self::Remove => "REMOVE_PARAM",
            Self::Set => "SET_PARAMS",
        }
    }
}

impl core::str::FromStr for ActionKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ADD_PARAM" => Ok(Self::Add),
            "REMOVE_PARAM" => Ok(Self::Remove),
            "SET_PARAMS" => Ok(Self::Set),
            _ => Err(ParseError::UnknownAction),
        }
    }
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Action {
    /// Pair a kind with its payload.
    /// Returns `None` when the payload shape does not fit the kind.
    pub fn from_parts(kind: ActionKind, payload: Payload) -> Option<Self> {
        match (kind, payload) {
            (ActionKind::Add, Payload::Param(param)) => Some(Self::Add(param)),
            (ActionKind::Remove, Payload::Param(param)) => Some(Self::Remove(param)),
            (ActionKind::Set, Payload::List(params)) => Some(Self::Set(params)),
            _ => None,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Add(_) => ActionKind::Add,
            Self::Remove(_) => ActionKind::Remove,
            Self::Set(_) => ActionKind::Set,
        }
    }
}

/// Main reducer for the advanced search state.
pub fn reduce(state: State, action: Action) -> State {
    let State { mut params } = state;
    match action {
        Action::Add(param) => params.add(param),
        Action::Remove(param) => params.remove(&param),
        Action::Set(new_params) => params = new_params,
    }
    State { params }
}

/// Reduce a loosely-typed `{type, param}` action.
/// Unknown type strings and payloads of the wrong shape leave the state unchanged.
pub fn reduce_raw(state: State, action_type: &str, payload: Payload) -> State {
    let action = action_type
        .parse::<ActionKind>()
        .ok()
        .and_then(|kind| Action::from_parts(kind, payload));
    match action {
        Some(action) => reduce(state, action),
        None => state,
    }
}
