//! File format implementations.
//!
//! - [`exposures`]: ESME simulation result footer

pub mod exposures;
