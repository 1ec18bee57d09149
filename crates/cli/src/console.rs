//! Terminal-backed output sink.
//!
//! [`Console`] is the [`Output`] implementation real applications hand to
//! [`termkit_core::app::Application::run`]: it renders style codes as SGR
//! escape sequences on standard output, redraws the progress bar in place,
//! and reads interactive answers from standard input.

use std::io::{stdin, stdout, Write};
use std::process;

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use itertools::Itertools;
use log::warn;
use termkit_core::error::Result;
use termkit_core::output::Output;

#[derive(Debug, Default)]
pub struct Console;

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Output for Console {
    fn write(&mut self, text: &str, styles: &[u8]) {
        let mut out = stdout();
        let written = if styles.is_empty() {
            write!(out, "{text}")
        } else {
            write!(out, "\x1b[{}m{text}\x1b[0m", styles.iter().join(";"))
        };
        if let Err(error) = written.and_then(|()| out.flush()) {
            warn!("failed to write to stdout: {error}");
        }
    }

    fn progress_bar(&mut self, done: f64, total: f64) {
        let percent = if total > 0.0 {
            ((done / total) * 100.0).floor().clamp(0.0, 100.0) as usize
        } else {
            0
        };

        let mut out = stdout();
        let drawn = queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))
            .and_then(|()| {
                write!(
                    out,
                    "[{}>{}] - {percent}%   {done}/{total}",
                    "=".repeat(percent),
                    " ".repeat(100 - percent),
                )
            })
            .and_then(|()| out.flush());
        if let Err(error) = drawn {
            warn!("failed to draw progress bar: {error}");
        }
    }

    /// Prints the question and reads one trimmed line from standard input.
    /// Answering `exit` or `quit` terminates the process immediately.
    fn ask(&mut self, question: &str) -> Result<String> {
        self.write(&format!("{question} "), &[]);

        let mut line = String::new();
        stdin().read_line(&mut line)?;
        let answer = line.trim().to_string();

        if answer == "exit" || answer == "quit" {
            process::exit(0);
        }

        Ok(answer)
    }
}
