//! # abm-tools: helper utilities for agent-based models
//!
//! Small building blocks shared by agents, environments and parameter
//! sweeps of an agent-based modeling framework.
//!
//! | Helper | Entry point | What it does |
//! |--------|-------------|-------------|
//! | Nested matrices | [`make_matrix`] | Grid scaffolding of a fixed shape |
//! | List normalization | [`make_list`] | "One or many" inputs as a list |
//! | SALib ranges | [`param_tuples_to_salib`] | Parameter ranges as a SALib problem |
//! | Attribute dictionary | [`AttrDict`] | Parameter records with attribute access |
//!
//! All helpers are synchronous and keep no global state. Logging goes
//! through `tracing`; install a subscriber in the host application to see it.
//!
//! ## Dynamic values
//!
//! Parameters and normalized lists hold [`serde_json::Value`]. `null` is the
//! absence value throughout.

#![deny(missing_docs)]

pub mod attr_dict;
pub mod error;
pub mod list;
pub mod matrix;
pub mod salib;

// Re-exports for convenience
pub use attr_dict::{AttrDict, ShortRepr};
pub use error::{AttrError, Error, ParamError, ShapeError};
pub use list::{Listable, NumericArray, make_list, make_list_of};
pub use matrix::{
    Matrix, NestedContainer, make_matrix, make_matrix_default, make_matrix_in,
    make_matrix_indexed, make_matrix_indexed_in,
};
pub use salib::{SalibProblem, param_tuples_to_salib, salib_from_params};
