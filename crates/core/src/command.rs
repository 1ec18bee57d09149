//! Command definitions and handler variants.

use crate::error::Result;
use crate::input::Input;
use crate::output::Output;
use crate::parameter::Parameter;

/// A structured command: a name, optional parameter declarations, and help
/// text. Implement this when a command declares typed parameters or wants a
/// dedicated help page; plain commands can register a bare callback instead.
pub trait Command {
    /// The registered name. May contain a single `:` separating a group
    /// prefix used by the `help` listing.
    fn name(&self) -> &str;

    /// Runs the command against fully resolved input.
    ///
    /// # Errors
    ///
    /// Any error surfaces to the dispatcher, which reports it through the
    /// sink and converts it into a failed result. It never escapes further.
    fn execute(&self, input: &Input, output: &mut dyn Output) -> Result<()>;

    /// Parameter declarations, resolved in order before execution.
    fn parameters(&self) -> Vec<Parameter> {
        Vec::new()
    }

    /// One-line summary shown in the command listing.
    fn definition(&self) -> String {
        String::new()
    }

    /// Longer help text shown by `--help`. Falls back to the definition when
    /// empty.
    fn help(&self) -> String {
        String::new()
    }
}

/// A plain function handler taking the resolved input and a sink.
pub type Callback = Box<dyn Fn(&Input, &mut dyn Output) -> Result<()>>;

/// The two handler shapes a registration can carry. Dispatch switches on the
/// variant, never on runtime type probing.
pub(crate) enum Handler {
    Callback(Callback),
    Object(Box<dyn Command>),
}

/// One registry entry. The command name is the registry key.
pub(crate) struct Registration {
    pub definition: String,
    pub help: String,
    pub handler: Handler,
}
