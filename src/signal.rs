use std::sync::atomic::{AtomicBool, Ordering};

use nix::libc;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn record_interrupt(_: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Catches SIGINT for as long as it lives, so Ctrl-C while a child runs stops
/// the child but not the shell. The child still gets the default action since
/// caught signals are reset on exec.
pub struct InterruptGuard {
    previous: Option<SigAction>,
}

impl InterruptGuard {
    pub fn install() -> Self {
        let action = SigAction::new(
            SigHandler::Handler(record_interrupt),
            SaFlags::SA_RESTART,
            SigSet::empty(),
        );
        // SAFETY: the handler only stores to an atomic.
        let previous = match unsafe { sigaction(Signal::SIGINT, &action) } {
            Ok(previous) => Some(previous),
            Err(e) => {
                log::warn!("could not install SIGINT handler: {e}");
                None
            }
        };
        Self { previous }
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            // SAFETY: restores whatever disposition was in place before.
            let _ = unsafe { sigaction(Signal::SIGINT, &previous) };
        }
    }
}

/// True once per SIGINT caught under an `InterruptGuard`.
pub fn take_interrupt() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}
