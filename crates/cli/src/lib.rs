//! Termkit CLI Library
//!
//! The terminal-facing half of termkit. Where `termkit-core` owns parsing,
//! validation, dispatch and table layout, this crate owns the actual
//! terminal: the [`Console`] sink that emits ANSI escape sequences, drives
//! the in-place progress bar, and reads interactive answers from stdin.
//!
//! The `tk` binary in this crate is a small demo application wired through
//! the toolkit end to end.

pub mod console;

pub use console::Console;
