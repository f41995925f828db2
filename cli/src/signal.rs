//! Ctrl+C handling for long sweeps.

use netfold_core::CancelToken;
use tracing::debug;

/// Returns a token that Ctrl+C cancels.
///
/// Only one handler can be installed per process. When one is already in
/// place the token is still returned and simply never fires from a signal.
pub fn cancel_on_interrupt() -> CancelToken {
    let token = CancelToken::new();
    let handle = token.clone();

    if let Err(e) = ctrlc::set_handler(move || handle.cancel()) {
        debug!("interrupt handler not installed: {e}");
    }

    token
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_starts_live_and_can_be_cancelled() {
        let token = cancel_on_interrupt();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_second_registration_still_yields_a_token() {
        let first = cancel_on_interrupt();
        let second = cancel_on_interrupt();
        assert!(!first.is_cancelled());
        assert!(!second.is_cancelled());
    }
}
