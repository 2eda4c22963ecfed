//! Terminal output helpers.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `indicatif` for the model-call spinner

use std::io::Write;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub fn header(text: &str) {
    println!("{}", style(text).bold().cyan());
}

pub fn dim(text: &str) {
    println!("{}", style(text).dim());
}

pub fn warning(text: &str) {
    eprintln!("{} {}", style("!").yellow(), text);
}

pub fn error(text: &str) {
    eprintln!("{} {}", style("✗").red(), style(text).bright());
}

/// Spinner shown while the model call is in flight; clear it on the first
/// streamed emission.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner());
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Print only the not-yet-printed suffix of a growing response prefix.
/// `printed` tracks how many characters are already on screen.
pub fn stream_delta(response: &str, printed: &mut usize) {
    let delta: String = response.chars().skip(*printed).collect();
    if delta.is_empty() {
        return;
    }
    print!("{delta}");
    let _ = std::io::stdout().flush();
    *printed += delta.chars().count();
}
