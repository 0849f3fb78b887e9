use std::io::{self, Write};

pub fn handle_echo_command<W: Write>(out: &mut W, args: &[String]) -> io::Result<()> {
    writeln!(out, "{}", args.join(" "))
}
