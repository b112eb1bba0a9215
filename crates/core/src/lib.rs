//! Pure domain logic for the rigwatch telemetry monitor.
//!
//! No HTTP, no I/O. The API crate owns transport concerns and calls into
//! this crate for state updates and alert evaluation.

pub mod alert;
pub mod error;
pub mod reading;
pub mod rules;
