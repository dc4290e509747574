use std::io::IsTerminal;

use anstyle::{AnsiColor, RgbColor, Style};

use crate::options::CommandOption;

const ACCENT_RGB: (u8, u8, u8) = (207, 106, 76);

const PRIMARY_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Rgb(RgbColor(
    ACCENT_RGB.0,
    ACCENT_RGB.1,
    ACCENT_RGB.2,
))));
const SUCCESS_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)));
const ERROR_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));
const WARN_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Yellow)));
const DIM: Style = Style::new().dimmed();

/// Console styling, only emitting escape codes when stderr is a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    #[must_use]
    pub fn detect() -> Self {
        Palette {
            color: std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn plain() -> Self {
        Palette { color: false }
    }

    #[must_use]
    pub fn colored() -> Self {
        Palette { color: true }
    }

    fn paint(self, style: Style, text: &str) -> String {
        if self.color {
            format!("{style}{text}{style:#}")
        } else {
            text.to_string()
        }
    }

    #[must_use]
    pub fn error(self) -> String {
        self.paint(ERROR_COLOR, "✘")
    }

    #[must_use]
    pub fn warning(self) -> String {
        self.paint(WARN_COLOR, "!")
    }

    #[must_use]
    pub fn dim(self, text: &str) -> String {
        self.paint(DIM, text)
    }

    #[must_use]
    pub fn format_start_message(self, option: &CommandOption) -> String {
        format!(
            "{} Running \"{}\" ({})...",
            self.paint(PRIMARY_COLOR, "❱"),
            option.name,
            option.command
        )
    }

    #[must_use]
    pub fn format_success_message(self) -> String {
        format!("{} Command completed.", self.paint(SUCCESS_COLOR, "✓"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_message_names_option_and_command() {
        let message = Palette::plain().format_start_message(&CommandOption::new("build", "cargo build"));
        assert_eq!(message, "❱ Running \"build\" (cargo build)...");
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            Palette::plain().format_success_message(),
            "✓ Command completed."
        );
    }

    #[test]
    fn test_plain_palette_has_no_escape_codes() {
        let plain = Palette::plain();
        for text in [plain.error(), plain.warning(), plain.dim("x")] {
            assert!(!text.contains('\x1b'), "unexpected escape code in {text:?}");
        }
    }

    #[test]
    fn test_colored_palette_styles_glyphs() {
        let error = Palette::colored().error();
        assert!(error.starts_with('\x1b'));
        assert!(error.contains('✘'));
    }
}
