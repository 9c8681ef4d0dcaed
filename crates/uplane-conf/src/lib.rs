// crates/uplane-conf/src/lib.rs

//! Parses and generates O-RAN user-plane configuration
//! (`urn:o-ran:uplane-conf:1.0`) XML documents.
//!
//! It supports:
//! - [`load_uplane_conf_from_str`]: populating a [`RadioUnitConfig`] from
//!   the `tx-array-carriers` and `rx-array-carriers` sections of a
//!   document, wherever they sit in the tree.
//! - [`save_uplane_conf_to_string`]: serializing a [`RadioUnitConfig`]
//!   back into a schema-conforming, pretty-printed XML string.

// --- Crate Modules ---

mod builder;
mod error;
mod model;
mod parser;
mod types;

// --- Public API Re-exports ---

pub use builder::save_uplane_conf_to_string;
pub use error::UplaneError;
pub use parser::load_uplane_conf_from_str;
pub use types::{ArrayCarrier, DelayManagement, RadioUnitConfig, MAX_NAME_LEN, MAX_TOKEN_LEN};
