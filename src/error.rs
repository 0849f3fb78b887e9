use thiserror::Error;

pub type ShellResult<T> = Result<T, ShellError>;

/// Errors that escape a single dispatch step.
///
/// User mistakes (bad arguments, unknown commands, missing directories) are
/// printed by the handlers and never show up here.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("syntax error: unterminated quote or escape")]
    Tokenize,

    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    InvalidVar { var: &'static str, value: String },
}
