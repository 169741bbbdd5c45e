//! Final "press a key" prompt.

use std::io::{self, BufRead, Write};

/// Prints the exit prompt and waits for a line (or EOF) on stdin.
///
/// Downloading is already over at this point, so a closed stdin or stdout
/// is logged and otherwise ignored.
pub(super) fn wait_for_enter() {
    let mut stdout = io::stdout();
    if let Err(e) = write!(stdout, "Press any key to exit...").and_then(|()| stdout.flush()) {
        tracing::warn!("exit prompt: write stdout: {}", e);
    }
    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        tracing::warn!("exit prompt: read stdin: {}", e);
    }
}
