//! Terminal notifier
//!
//! Prints poll progress and outcomes as colored console lines.

use colored::*;
use vision_poller::Notifier;

/// Notifier writing to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        println!("{} {}", "ℹ".cyan(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message.green());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message.red());
    }
}
