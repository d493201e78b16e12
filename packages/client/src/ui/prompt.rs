//! Prompt handling.

use std::io::Write;

pub fn prompt_for(name: &str) -> String {
    format!("{}> ", name)
}

/// Redisplay the prompt after printing asynchronous output
pub fn redisplay_prompt(name: &str) {
    print!("{}", prompt_for(name));
    std::io::stdout().flush().ok();
}
