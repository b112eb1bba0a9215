//! Request handlers.
//!
//! Handlers decode input, call into `rigwatch_core` for state updates and
//! alert evaluation, and map errors via [`crate::error::AppError`].

pub mod telemetry;
