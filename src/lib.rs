pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod path;
pub mod shell;
pub mod signal;
pub mod tokenize;

pub use error::{ShellError, ShellResult};
pub use shell::{start_shell, Shell};
