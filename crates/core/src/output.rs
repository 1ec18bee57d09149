//! The output sink consumed by dispatch and command handlers.
//!
//! The core never interprets what a style code looks like; it only threads
//! small SGR integers through to whatever sink implementation the caller
//! provides. A terminal-backed implementation lives in the cli crate; tests
//! use recording sinks.

use crate::error::Result;

/// SGR style codes. Foreground colors, background colors and text attributes
/// share one namespace of small integers, exactly as the terminal sees them.
pub mod style {
    pub const DEFAULT: u8 = 39;
    pub const BLACK: u8 = 30;
    pub const RED: u8 = 31;
    pub const GREEN: u8 = 32;
    pub const YELLOW: u8 = 33;
    pub const BLUE: u8 = 34;
    pub const MAGENTA: u8 = 35;
    pub const CYAN: u8 = 36;
    pub const LIGHT_GRAY: u8 = 37;
    pub const DARK_GRAY: u8 = 90;
    pub const LIGHT_RED: u8 = 91;
    pub const LIGHT_GREEN: u8 = 92;
    pub const LIGHT_YELLOW: u8 = 93;
    pub const LIGHT_BLUE: u8 = 94;
    pub const LIGHT_MAGENTA: u8 = 95;
    pub const LIGHT_CYAN: u8 = 96;
    pub const WHITE: u8 = 97;

    pub const BG_BLACK: u8 = 40;
    pub const BG_RED: u8 = 41;
    pub const BG_GREEN: u8 = 42;
    pub const BG_YELLOW: u8 = 43;
    pub const BG_BLUE: u8 = 44;
    pub const BG_MAGENTA: u8 = 45;
    pub const BG_CYAN: u8 = 46;

    pub const BOLD: u8 = 1;
    pub const ITALIC: u8 = 3;
    pub const UNDERLINE: u8 = 4;
    pub const STRIKETHROUGH: u8 = 9;
}

/// Sink capability handed to handlers and used by dispatch for reporting.
///
/// Only [`Output::write`], [`Output::progress_bar`] and [`Output::ask`] are
/// sink-specific; everything else is provided in terms of `write`.
pub trait Output {
    /// Writes raw text with the given style codes. An empty code slice means
    /// unstyled text.
    fn write(&mut self, text: &str, styles: &[u8]);

    /// Redraws an in-place progress bar for `done` of `total` units.
    fn progress_bar(&mut self, done: f64, total: f64);

    /// Prints a question and reads one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error when reading from the input stream fails.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Writes one line, replacing `{key}` placeholders from `context` first.
    fn write_line(&mut self, text: &str, context: &[(&str, &str)], styles: &[u8]) {
        let text = interpolate(text, context);
        self.write(&text, styles);
        self.write("\n", &[]);
    }

    fn error(&mut self, msg: &str) {
        self.write_line(
            &format!("[ERROR] {msg}"),
            &[],
            &[style::WHITE, style::BOLD, style::BG_RED],
        );
    }

    fn success(&mut self, msg: &str) {
        self.write_line(
            &format!("[SUCCESS] {msg}"),
            &[],
            &[style::WHITE, style::BG_GREEN, style::BOLD],
        );
    }

    fn warning(&mut self, msg: &str) {
        self.write_line(
            &format!("[WARNING] {msg}"),
            &[],
            &[style::WHITE, style::BG_YELLOW, style::BOLD],
        );
    }

    fn info(&mut self, msg: &str) {
        self.write_line(&format!("[INFO] {msg}"), &[], &[style::CYAN]);
    }

    /// Writes `key : value` lines with the key column padded to the widest
    /// key, indented by `indent` tab stops.
    fn list(&mut self, entries: &[(String, String)], indent: usize) {
        let key_width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        for (key, value) in entries {
            let line = format!(
                "{}{key}{} : {value}",
                "\t".repeat(indent),
                " ".repeat(key_width - key.len()),
            );
            self.write_line(&line, &[], &[]);
        }
    }
}

/// Replaces `{key}` placeholders with their context values.
#[must_use]
pub fn interpolate(text: &str, context: &[(&str, &str)]) -> String {
    let mut interpolated = text.to_string();
    for (key, value) in context {
        interpolated = interpolated.replace(&format!("{{{key}}}"), value);
    }
    interpolated
}
