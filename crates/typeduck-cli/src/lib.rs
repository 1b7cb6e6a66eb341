//! Library half of the `typeduck` binary: argument parsing, batch mode,
//! output rendering and tracing setup.

pub mod args;
pub mod batch;
pub mod reporter;
pub mod tracing_config;
