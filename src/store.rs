use crate::compat::String;
use crate::parameter_list::ParameterList;
use crate::reducer::{Action, State, initial_state, reduce};
use crate::url_search_params::UrlSearchParams;

/// Single owner of the advanced search state.
/// Actions are applied one at a time, each to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    state: State,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(initial_state())
    }

    pub fn with_state(state: State) -> Self {
        Self { state }
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = core::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn params(&self) -> &ParameterList {
        &self.state.params
    }

    pub fn search_params(&self) -> UrlSearchParams {
        self.state.params.to_search_params()
    }

    pub fn query_string(&self) -> String {
        self.state.query_string()
    }

    pub fn into_state(self) -> State {
        self.state
    }
}

impl Extend<Action> for Store {
    fn extend<I: IntoIterator<Item = Action>>(&mut self, actions: I) {
        for action in actions {
            self.dispatch(action);
        }
    }
}
