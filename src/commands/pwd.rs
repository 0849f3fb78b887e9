use std::env;
use std::io::{self, Write};

pub fn handle_pwd_command<W: Write>(out: &mut W) -> io::Result<()> {
    match env::current_dir() {
        Ok(path) => writeln!(out, "{}", path.display()),
        Err(e) => writeln!(out, "pwd: error: {}", e),
    }
}
