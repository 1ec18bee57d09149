//! Command registry and dispatch.
//!
//! An [`Application`] is populated with commands once at startup and is
//! read-only afterwards. One call to [`Application::run`] drives a whole
//! invocation: resolve the command name, render help when asked, validate
//! declared parameters fail-fast, execute the handler, and contain any error
//! at the dispatch boundary. `run` always returns a plain success boolean;
//! nothing escapes it.

use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;

use crate::command::{Command, Handler, Registration};
use crate::error::{Error, Result};
use crate::input::{Input, ShortOptionStyle};
use crate::output::{style, Output};

/// The command registry and top-level dispatcher.
pub struct Application {
    name: String,
    version: String,
    short_option_style: ShortOptionStyle,
    commands: IndexMap<String, Registration>,
}

impl Application {
    #[must_use]
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            short_option_style: ShortOptionStyle::default(),
            commands: IndexMap::new(),
        }
    }

    /// Selects which single-dash parsing rule `run` uses.
    #[must_use]
    pub fn with_short_option_style(mut self, short_option_style: ShortOptionStyle) -> Self {
        self.short_option_style = short_option_style;
        self
    }

    /// Registers a plain callback command. The definition doubles as the
    /// help text. Re-registering a name overwrites the previous entry.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the name is empty.
    pub fn register<F>(&mut self, name: &str, definition: &str, callback: F) -> Result<&mut Self>
    where
        F: Fn(&Input, &mut dyn Output) -> Result<()> + 'static,
    {
        self.insert(
            name,
            definition.to_string(),
            definition.to_string(),
            Handler::Callback(Box::new(callback)),
        )
    }

    /// Registers a structured command object under its own name.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the command reports an empty name.
    pub fn register_command(&mut self, command: Box<dyn Command>) -> Result<&mut Self> {
        let name = command.name().to_string();
        let definition = command.definition();
        let mut help = command.help();
        if help.is_empty() {
            help.clone_from(&definition);
        }
        self.insert(&name, definition, help, Handler::Object(command))
    }

    fn insert(
        &mut self,
        name: &str,
        definition: String,
        help: String,
        handler: Handler,
    ) -> Result<&mut Self> {
        if name.trim().is_empty() {
            return Err(Error::EmptyCommandName);
        }
        self.commands.insert(
            name.to_string(),
            Registration {
                definition,
                help,
                handler,
            },
        );
        Ok(self)
    }

    /// Dispatches one invocation.
    ///
    /// `argv` is the full process argument vector, program name first; the
    /// second token selects the command and the rest are classified. Returns
    /// `false` without output when no command name was given, reports
    /// unknown names and all validation/handler failures through the sink
    /// (exactly one line each), and handles the literal `help` name and an
    /// explicit `--help` argument without invoking any handler.
    pub fn run(&self, argv: &[String], output: &mut dyn Output) -> bool {
        let Some((program, rest)) = argv.split_first() else {
            return false;
        };
        let Some((command_name, tokens)) = rest.split_first() else {
            return false;
        };

        let mut input = Input::parse_with(tokens, self.short_option_style);

        if command_name == "help" {
            debug!("rendering the command listing");
            self.render_listing(output);
            return true;
        }

        debug!("resolving command `{command_name}`");
        let Some(registration) = self.commands.get(command_name.as_str()) else {
            output.error(&format!("The `{command_name}` command was not found."));
            return false;
        };

        if input.has_argument("help") {
            debug!("rendering help for `{command_name}`");
            self.render_command_help(program, command_name, registration, output);
            return true;
        }

        if let Handler::Object(command) = &registration.handler {
            debug!("validating parameters for `{command_name}`");
            for parameter in command.parameters() {
                if parameter.resolve(&mut input, output).is_err() {
                    return false;
                }
            }
        }

        debug!("executing `{command_name}`");
        let outcome = match &registration.handler {
            Handler::Callback(callback) => callback(&input, output),
            Handler::Object(command) => command.execute(&input, output),
        };

        match outcome {
            Ok(()) => true,
            Err(error) => {
                output.error(&error.to_string());
                false
            }
        }
    }

    /// The `help` command: all registered commands, grouped by the substring
    /// before the first `:`, ungrouped commands last.
    fn render_listing(&self, output: &mut dyn Output) {
        output.write_line(&format!("{} v{}", self.name, self.version), &[], &[]);
        output.write_line("", &[], &[]);
        output.write_line("[COMMANDS]", &[], &[style::RED, style::BOLD]);

        let mut groups: IndexMap<&str, Vec<(String, String)>> = IndexMap::new();
        let mut ungrouped: Vec<(String, String)> = Vec::new();
        for (name, registration) in &self.commands {
            let summary = if registration.definition.is_empty() {
                registration.help.clone()
            } else {
                registration.definition.clone()
            };
            match name.split_once(':') {
                Some((group, _)) => groups.entry(group).or_default().push((name.clone(), summary)),
                None => ungrouped.push((name.clone(), summary)),
            }
        }

        for (group, entries) in &groups {
            output.write_line("", &[], &[]);
            output.write_line(group, &[], &[style::MAGENTA]);
            output.list(entries, 1);
        }
        output.write_line("", &[], &[]);
        output.list(&ungrouped, 0);
    }

    /// Per-command usage: help text, the parameter list, and a usage line
    /// with required parameters before optional ones.
    fn render_command_help(
        &self,
        program: &str,
        name: &str,
        registration: &Registration,
        output: &mut dyn Output,
    ) {
        output.write_line(&registration.help, &[], &[]);

        let Handler::Object(command) = &registration.handler else {
            return;
        };

        let parameters = command.parameters();
        if !parameters.is_empty() {
            let entries: Vec<(String, String)> = parameters
                .iter()
                .map(|parameter| (parameter.display_name(), parameter.definition().to_string()))
                .collect();
            output.write_line("", &[], &[]);
            output.write_line("[PARAMETERS]", &[], &[]);
            output.list(&entries, 1);
        }

        let (required, optional): (Vec<_>, Vec<_>) = parameters
            .iter()
            .partition(|parameter| parameter.is_required());
        let usage = [program, name]
            .into_iter()
            .map(ToString::to_string)
            .chain(required.into_iter().map(|parameter| usage_piece(parameter, false)))
            .chain(optional.into_iter().map(|parameter| usage_piece(parameter, true)))
            .join(" ");

        output.write_line("", &[], &[]);
        output.write_line("[USAGE]", &[], &[]);
        output.write_line(&format!("\t{usage}"), &[], &[]);
    }
}

fn usage_piece(parameter: &crate::parameter::Parameter, optional: bool) -> String {
    let default = parameter
        .default()
        .map(ToString::to_string)
        .unwrap_or_default();
    let piece = format!(
        "{}=({}){}",
        parameter.display_name(),
        parameter.kind(),
        default
    );
    if optional {
        format!("[{piece}]")
    } else {
        piece
    }
}
