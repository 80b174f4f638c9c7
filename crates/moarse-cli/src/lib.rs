pub mod commands;
pub mod replay;
mod trace_init;

pub use trace_init::init_tracing;
