//! Shared data structures for the service center dashboard
//!
//! This module defines the domain types the rest of the crate works over:
//! - TextField: registry text with missing/empty/"null" folded into absence
//! - ServiceCenter: one registry row, deserialized from Ukrainian column names
//! - ServiceFlag: the fourteen boolean-like service/accessibility columns

mod field;
mod record;

pub use field::*;
pub use record::*;
