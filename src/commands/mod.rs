//! Command implementations

pub mod dictionary;
pub mod filter;
pub mod show;
pub mod simple;

pub use dictionary::run_build_dictionary;
pub use filter::run_filter;
pub use show::{run_reset, run_show};
pub use simple::run_simple;
