use std::io::{self, Write};
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::path::SearchPath;
use crate::signal::{self, InterruptGuard};

/// Starts child processes on behalf of the shell. Children share the shell's
/// standard streams and working directory, and every call blocks until the
/// child exits.
pub trait Executor {
    /// Run `program`, presenting `name` as its argv[0].
    fn run(&mut self, program: &Path, name: &str, args: &[String]) -> io::Result<ExitStatus>;

    /// Hand an unparsed line to the system shell.
    fn run_shell_line(&mut self, line: &str) -> io::Result<ExitStatus>;

    /// Whether the user hit Ctrl-C while the last child was running. Reading
    /// clears the flag.
    fn interrupted(&mut self) -> bool {
        false
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(&mut self, program: &Path, name: &str, args: &[String]) -> io::Result<ExitStatus> {
        let _guard = InterruptGuard::install();
        Command::new(program).arg0(name).args(args).status()
    }

    fn run_shell_line(&mut self, line: &str) -> io::Result<ExitStatus> {
        let _guard = InterruptGuard::install();
        Command::new("/bin/sh").arg("-c").arg(line).status()
    }

    fn interrupted(&mut self) -> bool {
        signal::take_interrupt()
    }
}

/// Look `command` up on the search path and run it with `arguments`.
///
/// The child's exit status is not reported to the user.
pub fn handle_execute_command<W: Write, E: Executor>(
    out: &mut W,
    executor: &mut E,
    command: &str,
    arguments: &[String],
    search: &SearchPath,
) -> io::Result<()> {
    let Some(program) = search.resolve(command) else {
        write!(out, "{}", command)?;
        for arg in arguments {
            write!(out, " {}", arg)?;
        }
        return writeln!(out, ": command not found");
    };

    out.flush()?;
    log::debug!("exec {} {:?}", program.display(), arguments);
    match executor.run(&program, command, arguments) {
        Ok(status) => log_status(command, status),
        Err(e) => writeln!(out, "{}: {}", command, e)?,
    }
    Ok(())
}

/// Redirection escape hatch: the whole line goes to `sh -c` as typed.
pub fn run_redirected_line<W: Write, E: Executor>(
    out: &mut W,
    executor: &mut E,
    line: &str,
) -> io::Result<()> {
    out.flush()?;
    log::debug!("sh -c {line:?}");
    match executor.run_shell_line(line) {
        Ok(status) => log_status("sh", status),
        Err(e) => writeln!(out, "sh: {}", e)?,
    }
    Ok(())
}

fn log_status(command: &str, status: ExitStatus) {
    if let Some(signal) = status.signal() {
        log::debug!("{command} killed by signal {signal}");
    } else if !status.success() {
        log::debug!("{command} exited with {status}");
    }
}
