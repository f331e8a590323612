//! Full-screen terminal interface
//!
//! Draft editing, attempt history with refinement picker, keyboard summary
//! and the live candidate list.

pub mod app;
mod rendering;

pub use app::{App, run_tui};
