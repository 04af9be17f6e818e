//! CLI command handlers, one per file.

mod completions;
mod interactive;
mod scan;

pub use completions::run_completions;
pub use interactive::run_interactive;
pub use scan::run_scan;
