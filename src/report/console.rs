use crate::checker::Violation;

use super::Reporter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

/// Reporter that prints each violation to stdout the moment it is recorded.
pub struct ConsoleReporter {
    use_colors: bool,
    found_issues: usize,
}

impl ConsoleReporter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            found_issues: 0,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, violation: Violation) {
        self.found_issues += 1;
        if self.use_colors {
            println!("{}{violation}{}", ansi::RED, ansi::RESET);
        } else {
            println!("{violation}");
        }
    }

    fn found_issues(&self) -> usize {
        self.found_issues
    }
}
