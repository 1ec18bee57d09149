//! Termkit Core Library
//!
//! This crate provides the core of termkit, a command-line application
//! toolkit. It registers named commands, classifies raw process arguments
//! into typed flags, options and positional segments, validates declared
//! parameters against kind and presence constraints, dispatches to the
//! matching handler, and renders bordered tables.
//!
//! # Key Features
//!
//! - **Value Coercion**: Raw tokens become their best-fit primitive values
//! - **Token Classification**: Long arguments, short options (two documented
//!   single-dash flavors) and positional segments
//! - **Parameter Validation**: Declared kinds, presence constraints and
//!   defaults, resolved fail-fast before execution
//! - **Command Dispatch**: Callback and structured-command handlers, grouped
//!   help listings, per-command usage rendering, contained handler errors
//! - **Table Rendering**: Display-width aware column sizing and bordered
//!   grid emission
//!
//! # Examples
//!
//! Registering and running a command:
//!
//! ```no_run
//! use termkit_core::app::Application;
//!
//! # fn demo(output: &mut dyn termkit_core::output::Output) -> termkit_core::error::Result<()> {
//! let mut app = Application::new("demo", "1.0");
//! app.register("greet", "Says hello.", |_input, output| {
//!     output.success("Hello!");
//!     Ok(())
//! })?;
//!
//! let argv: Vec<String> = std::env::args().collect();
//! let ok = app.run(&argv, output);
//! # let _ = ok;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod command;
pub mod error;
pub mod input;
pub mod output;
pub mod parameter;
pub mod table;
pub mod value;

pub use app::Application;
pub use command::Command;
pub use input::{Input, ShortOptionStyle};
pub use output::Output;
pub use parameter::{Halt, Parameter, ParameterKind};
pub use table::Table;
pub use value::Value;
