/// Clears the loop flag; arguments (an exit code included) are ignored and
/// the process always exits with status 0.
pub fn handle_exit_command(running: &mut bool, args: &[String]) {
    if !args.is_empty() {
        log::debug!("exit: ignoring arguments {args:?}");
    }
    *running = false;
}
