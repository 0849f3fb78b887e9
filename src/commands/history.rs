use std::io::{self, Write};

use crate::history::History;

pub fn handle_history_command<W: Write>(
    out: &mut W,
    history: &History,
    args: &[String],
) -> io::Result<()> {
    let count = match args.first() {
        None => history.len(),
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return writeln!(out, "history: {}: invalid argument", arg),
        },
    };
    for (index, line) in history.tail(count) {
        writeln!(out, "    {}  {}", index, line)?;
    }
    Ok(())
}
