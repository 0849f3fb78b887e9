use std::io::{self, Write};

use super::Builtin;
use crate::path::SearchPath;

pub fn handle_type_command<W: Write>(
    out: &mut W,
    args: &[String],
    search: &SearchPath,
) -> io::Result<()> {
    let Some(cmd) = args.first() else {
        return writeln!(out, "type: missing argument");
    };
    if Builtin::from_name(cmd).is_some() {
        writeln!(out, "{} is a shell builtin", cmd)
    } else if let Some(path) = search.resolve(cmd) {
        writeln!(out, "{} is {}", cmd, path.display())
    } else {
        writeln!(out, "{}: not found", cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(args: &[&str], search: &SearchPath) -> String {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_type_command(&mut out, &args, search).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_builtins_before_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("echo"), "").unwrap();
        let search = SearchPath::new([dir.path()]);

        for name in ["exit", "type", "echo", "pwd", "cd", "history"] {
            assert_eq!(run(&[name], &search), format!("{name} is a shell builtin\n"));
        }
    }

    #[test]
    fn reports_resolved_path() {
        let dir = TempDir::new().unwrap();
        let tool = dir.path().join("tool");
        fs::write(&tool, "").unwrap();
        let search = SearchPath::new([dir.path()]);

        assert_eq!(run(&["tool"], &search), format!("tool is {}\n", tool.display()));
    }

    #[test]
    fn reports_not_found() {
        assert_eq!(run(&["nope"], &SearchPath::default()), "nope: not found\n");
    }

    #[test]
    fn missing_argument_prints_usage() {
        assert_eq!(run(&[], &SearchPath::default()), "type: missing argument\n");
    }
}
