use std::io::{self, Write};

use anyhow::Context as _;
use rustyline::completion::{Candidate, Completer};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::history::DefaultHistory;
use rustyline::{Context, Editor, Helper};

use crate::commands::cd::handle_cd_command;
use crate::commands::echo::handle_echo_command;
use crate::commands::execute::{handle_execute_command, run_redirected_line, Executor, SystemExecutor};
use crate::commands::exit::handle_exit_command;
use crate::commands::history::handle_history_command;
use crate::commands::pwd::handle_pwd_command;
use crate::commands::type_cmd::handle_type_command;
use crate::commands::{Builtin, Command};
use crate::config::Config;
use crate::error::{ShellError, ShellResult};
use crate::history::History;
use crate::path::SearchPath;
use crate::tokenize::{is_redirection, tokenize};

// --------------------- Session ---------------------

/// One interactive session: the loop flag, the command history, where output
/// goes, and how child processes are started.
pub struct Shell<W: Write, E: Executor> {
    out: W,
    executor: E,
    history: History,
    running: bool,
}

impl Shell<io::Stdout, SystemExecutor> {
    pub fn stdio() -> Self {
        Shell::new(io::stdout(), SystemExecutor)
    }
}

impl<W: Write, E: Executor> Shell<W, E> {
    pub fn new(out: W, executor: E) -> Self {
        Self {
            out,
            executor,
            history: History::new(),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Process one line of input. Every non-empty line is recorded before it
    /// is parsed, so lines that fail to tokenize or run are still in history.
    pub fn handle_line(&mut self, raw: &str) -> ShellResult<()> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }
        self.history.push(line);

        if is_redirection(line) {
            run_redirected_line(&mut self.out, &mut self.executor, line)?;
        } else {
            match tokenize(line) {
                Ok(tokens) => self.dispatch(&tokens)?,
                Err(ShellError::Tokenize) => writeln!(self.out, "rsh: {}", ShellError::Tokenize)?,
                Err(e) => return Err(e),
            }
        }

        // Ctrl-C during a child ends the session the same way it does at the
        // prompt.
        if self.executor.interrupted() {
            log::debug!("interrupted while a child was running");
            writeln!(self.out)?;
            self.running = false;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Read and handle lines until `exit`, end of input, or an interrupt.
    /// End of input and interrupts print a single newline.
    pub fn run<S: LineSource>(&mut self, source: &mut S, prompt: &str) -> ShellResult<()> {
        while self.running {
            match source.read_line(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        source.remember(line.trim());
                    }
                    self.handle_line(&line)?;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    writeln!(self.out)?;
                    self.out.flush()?;
                    break;
                }
                Err(err) => {
                    log::error!("readline failed: {err}");
                    return Err(err.into());
                }
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, tokens: &[String]) -> ShellResult<()> {
        let Some((name, args)) = tokens.split_first() else {
            return Ok(());
        };
        let command = Command::classify(name);
        log::debug!("dispatch {command:?} args={args:?}");

        match command {
            Command::Builtin(Builtin::Exit) => handle_exit_command(&mut self.running, args),
            Command::Builtin(Builtin::Type) => {
                handle_type_command(&mut self.out, args, &SearchPath::from_env())?
            }
            Command::Builtin(Builtin::Echo) => handle_echo_command(&mut self.out, args)?,
            Command::Builtin(Builtin::Pwd) => handle_pwd_command(&mut self.out)?,
            Command::Builtin(Builtin::Cd) => handle_cd_command(&mut self.out, args)?,
            Command::Builtin(Builtin::History) => {
                handle_history_command(&mut self.out, &self.history, args)?
            }
            Command::External(name) => handle_execute_command(
                &mut self.out,
                &mut self.executor,
                name,
                args,
                &SearchPath::from_env(),
            )?,
        }
        Ok(())
    }
}

// --------------------- Rustyline Autocompletion ---------------------

#[derive(Debug, PartialEq)]
pub struct CommandCandidate(String);
impl Candidate for CommandCandidate {
    fn display(&self) -> &str {
        &self.0
    }

    fn replacement(&self) -> &str {
        &self.0
    }
}

/// Builtins plus every executable on `PATH` that starts with `prefix`, each
/// followed by a space. Recomputed on every call.
pub fn command_candidates(prefix: &str, search: &SearchPath) -> Vec<CommandCandidate> {
    let mut names = search.executables();
    names.extend(Builtin::names().map(String::from));
    names
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .map(|name| CommandCandidate(format!("{} ", name)))
        .collect()
}

pub struct ShellHelper;
impl Completer for ShellHelper {
    type Candidate = CommandCandidate;
    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<CommandCandidate>)> {
        // Only the command word is completed.
        if line.contains(' ') {
            return Ok((0, Vec::new()));
        }
        Ok((0, command_candidates(line, &SearchPath::from_env())))
    }
}
impl Hinter for ShellHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}
impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}
impl Helper for ShellHelper {}

// --------------------- REPL Loop using Rustyline ---------------------

/// Where input lines come from. End of input and Ctrl-C surface as
/// `ReadlineError::Eof` and `ReadlineError::Interrupted`.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    /// Offer a line for arrow-key recall.
    fn remember(&mut self, _line: &str) {}
}

impl LineSource for Editor<ShellHelper, DefaultHistory> {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.readline(prompt)
    }

    fn remember(&mut self, line: &str) {
        let _ = self.add_history_entry(line);
    }
}

pub fn start_shell(config: &Config) -> anyhow::Result<()> {
    let mut rl = Editor::<ShellHelper, DefaultHistory>::new()
        .context("failed to initialise line editor")?;
    rl.set_helper(Some(ShellHelper));

    Shell::stdio().run(&mut rl, &config.prompt)?;
    Ok(())
}
