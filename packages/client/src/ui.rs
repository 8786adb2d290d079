//! UI utilities for the client.

use std::io::Write;

/// Redisplay the prompt after printing asynchronous output
pub fn redisplay_prompt(sender: &str) {
    print!("{}> ", sender);
    std::io::stdout().flush().ok();
}
