use crate::error::{DdpError, UserFriendlyError};
use console::{style, Term};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    /// Colored message text.
    Human,
    /// Bare message text.
    Plain,
}

impl OutputMode {
    /// Human output when stdout is a terminal that supports colors.
    pub fn detect() -> Self {
        if Term::stdout().features().colors_supported() {
            OutputMode::Human
        } else {
            OutputMode::Plain
        }
    }
}

/// Prints user-facing messages. Everything goes to stdout so that callers
/// capturing the program's output see failures too. Styling never adds text:
/// the printed characters are the message itself in both modes.
pub struct OutputFormatter {
    mode: OutputMode,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn warning(&self, message: &str) {
        println!("{}", self.render(MessageType::Warning, message));
    }

    pub fn error(&self, message: &str) {
        println!("{}", self.render(MessageType::Error, message));
    }

    pub fn print_user_friendly_error(&self, error: &DdpError) {
        self.error(&error.user_message());
    }

    fn render(&self, msg_type: MessageType, message: &str) -> String {
        match self.mode {
            OutputMode::Plain => message.to_string(),
            OutputMode::Human => match msg_type {
                MessageType::Error => style(message).red().bold().to_string(),
                MessageType::Warning => style(message).yellow().bold().to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Error,
    Warning,
}
