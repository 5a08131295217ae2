//! Supporting context attached to diagnostics.

pub mod context;
