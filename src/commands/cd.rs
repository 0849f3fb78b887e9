use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use nix::unistd::{Uid, User};

pub fn handle_cd_command<W: Write>(out: &mut W, args: &[String]) -> io::Result<()> {
    let Some(rest) = args.first() else {
        return Ok(());
    };

    let target = if rest == "~" || rest.starts_with("~/") {
        match home_dir() {
            Some(mut path) => {
                if rest.len() > 1 {
                    // Skip the "~/" part and append the rest of the path.
                    path.push(&rest[2..]);
                }
                path
            }
            None => return writeln!(out, "cd: {}: No such file or directory", rest),
        }
    } else {
        PathBuf::from(rest)
    };

    if !target.is_dir() {
        return writeln!(out, "cd: {}: No such file or directory", rest);
    }
    if let Err(e) = env::set_current_dir(&target) {
        return writeln!(out, "cd: {}: {}", rest, e);
    }
    log::debug!("cd: now in {}", target.display());
    Ok(())
}

/// `$HOME`, falling back to the password database entry for the current user.
fn home_dir() -> Option<PathBuf> {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => User::from_uid(Uid::current()).ok().flatten().map(|user| user.dir),
    }
}
