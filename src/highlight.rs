use inksac::prelude::*;

use crate::core::commands::Verb;
use crate::core::config::ColorMode;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl SyntaxHighlighter {
    pub fn new(mode: ColorMode) -> Self {
        let color_support = match mode {
            ColorMode::Auto => check_color_support().unwrap_or(ColorSupport::NoColor),
            ColorMode::Always => ColorSupport::TrueColor,
            ColorMode::Never => ColorSupport::NoColor,
        };
        Self { color_support }
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors a known verb and `--flags`. Spacing is preserved so the
    /// editor's cursor stays aligned.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut seen_word = false;
        input
            .split(' ')
            .map(|part| {
                if part.is_empty() {
                    return String::new();
                }
                let first = !seen_word;
                seen_word = true;
                if first && Verb::from_token(part).is_some() {
                    let verb_style = Style::builder().foreground(Color::Cyan).bold().build();
                    part.style(verb_style).to_string()
                } else if !first && part.starts_with("--") {
                    let flag_style = Style::builder().foreground(Color::Yellow).build();
                    part.style(flag_style).to_string()
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }
}
