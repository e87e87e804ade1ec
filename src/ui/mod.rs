//! User interface and interaction
//!
//! CLI parsing, terminal rendering of results, the progress spinner, the
//! interactive prompt loop and shell completion generation.

pub mod cli;
pub mod color;
pub mod completion;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config};
pub use completion::{install_completion, print_completions};
pub use interactive::InteractiveSession;
pub use output::OutputFormat;
pub use progress::ProgressReporter;
