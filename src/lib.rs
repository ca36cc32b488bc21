#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod error;
mod helpers;
mod parameter;
mod parameter_list;
mod percent_encode;
mod reducer;
mod store;
mod url_search_params;

// Public API
pub use error::ParseError;
pub use parameter::{MULTIPLE_SUFFIX, Parameter, is_param_multiple};
pub use parameter_list::{ParameterList, add_param, find_param, params_by_name, remove_param};
pub use reducer::{Action, ActionKind, Payload, State, initial_state, reduce, reduce_raw};
pub use store::Store;
pub use url_search_params::{UrlSearchParams, params_to_search_params};

pub type Result<T> = core::result::Result<T, ParseError>;
