pub mod admin;
pub mod auth;
pub mod calibration;
pub mod chemical;
pub mod cycle_count;
pub mod dates;
pub mod kit;
pub mod order;
pub mod tool;
pub mod warehouse;

use serde::{Deserialize, Serialize};

/// Body of a mutation response. The server may attach more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
}
