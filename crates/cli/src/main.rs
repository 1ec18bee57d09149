use std::env;
use std::process::ExitCode;

use termkit_cli::Console;
use termkit_core::app::Application;
use termkit_core::command::Command;
use termkit_core::error::Result;
use termkit_core::input::Input;
use termkit_core::output::{style, Output};
use termkit_core::parameter::{Parameter, ParameterKind};
use termkit_core::table::Table;
use termkit_core::value::Value;

/// Structured demo command with typed parameters.
struct Greet {
    parameters: Vec<Parameter>,
}

impl Greet {
    fn new() -> Result<Self> {
        Ok(Self {
            parameters: vec![
                Parameter::new("name", ParameterKind::Str, None, true, "Who to greet.")?,
                Parameter::new(
                    "count",
                    ParameterKind::Int,
                    Some(Value::Int(1)),
                    false,
                    "How many times to greet.",
                )?,
            ],
        })
    }
}

impl Command for Greet {
    fn name(&self) -> &str {
        "greet"
    }

    fn definition(&self) -> String {
        "Greets someone a configurable number of times.".to_string()
    }

    fn help(&self) -> String {
        "Greets someone by name. Pass --name=<who> and optionally --count=<n>.".to_string()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.parameters.clone()
    }

    fn execute(&self, input: &Input, output: &mut dyn Output) -> Result<()> {
        let name = input.argument_or("name", Value::Str("world".to_string()));
        let count = match input.argument("count") {
            Some(Value::Int(count)) => *count,
            _ => 1,
        };
        for _ in 0..count {
            output.success(&format!("Hello, {name}!"));
        }
        Ok(())
    }
}

fn build_application() -> Result<Application> {
    let mut app = Application::new("termkit demo", env!("CARGO_PKG_VERSION"));

    app.register_command(Box::new(Greet::new()?))?;

    app.register(
        "style:codes",
        "Renders a reference table of common style codes.",
        |_input, output| {
            let mut table = Table::new();
            table.row([
                ("code", Value::Int(i64::from(style::BOLD))),
                ("meaning", Value::Str("bold".to_string())),
            ]);
            table.row([
                ("code", Value::Int(i64::from(style::RED))),
                ("meaning", Value::Str("red foreground".to_string())),
            ]);
            table.row([
                ("code", Value::Int(i64::from(style::BG_GREEN))),
                ("meaning", Value::Str("green background".to_string())),
            ]);
            output.write(&table.render(), &[]);
            Ok(())
        },
    )?;

    app.register(
        "input:echo",
        "Echoes the classified view of the given tokens.",
        |input, output| {
            let mut table = Table::new();
            for (name, value) in input.arguments() {
                table.row([
                    ("kind", Value::Str("argument".to_string())),
                    ("name", Value::Str(name.clone())),
                    ("value", value.clone()),
                ]);
            }
            for (name, value) in input.options() {
                table.row([
                    ("kind", Value::Str("option".to_string())),
                    ("name", Value::Str(name.clone())),
                    ("value", value.clone()),
                ]);
            }
            for (index, value) in input.segments().iter().enumerate() {
                table.row([
                    ("kind", Value::Str("segment".to_string())),
                    ("name", Value::Int(index as i64)),
                    ("value", value.clone()),
                ]);
            }
            output.write(&table.render(), &[]);
            Ok(())
        },
    )?;

    Ok(app)
}

fn execute() -> Result<bool> {
    // Captured exactly once; everything downstream receives it explicitly.
    let argv: Vec<String> = env::args().collect();
    let mut console = Console::new();
    Ok(build_application()?.run(&argv, &mut console))
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
