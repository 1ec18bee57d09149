#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use termkit_core::app::Application;
    use termkit_core::command::Command;
    use termkit_core::error::{Error, Result};
    use termkit_core::input::Input;
    use termkit_core::output::Output;
    use termkit_core::parameter::{Parameter, ParameterKind};
    use termkit_core::value::Value;

    /// Recording sink: captures everything a dispatch writes, serves
    /// scripted answers to `ask`, and logs progress-bar calls.
    #[derive(Default)]
    struct Recorder {
        buffer: String,
        answers: VecDeque<String>,
        progress: Vec<(f64, f64)>,
    }

    impl Recorder {
        fn with_answers(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(ToString::to_string).collect(),
                ..Self::default()
            }
        }

        fn lines(&self) -> Vec<&str> {
            self.buffer.lines().collect()
        }

        fn error_lines(&self) -> Vec<&str> {
            self.buffer
                .lines()
                .filter(|line| line.starts_with("[ERROR]"))
                .collect()
        }
    }

    impl Output for Recorder {
        fn write(&mut self, text: &str, _styles: &[u8]) {
            self.buffer.push_str(text);
        }

        fn progress_bar(&mut self, done: f64, total: f64) {
            self.progress.push((done, total));
        }

        fn ask(&mut self, _question: &str) -> Result<String> {
            Ok(self.answers.pop_front().unwrap_or_default())
        }
    }

    fn argv(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    /// Structured command used across the tests.
    struct Deploy {
        parameters: Vec<Parameter>,
    }

    impl Deploy {
        fn new() -> Self {
            Self {
                parameters: vec![
                    Parameter::new("host", ParameterKind::Str, None, true, "Target host.").unwrap(),
                    Parameter::new(
                        "port",
                        ParameterKind::Int,
                        Some(Value::Int(8080)),
                        false,
                        "Target port.",
                    )
                    .unwrap(),
                    Parameter::new(
                        "force",
                        ParameterKind::Bool,
                        Some(Value::Bool(false)),
                        false,
                        "Skip confirmation.",
                    )
                    .unwrap(),
                ],
            }
        }
    }

    impl Command for Deploy {
        fn name(&self) -> &str {
            "ops:deploy"
        }

        fn definition(&self) -> String {
            "Deploys to a host.".to_string()
        }

        fn parameters(&self) -> Vec<Parameter> {
            self.parameters.clone()
        }

        fn execute(&self, input: &Input, output: &mut dyn Output) -> Result<()> {
            let host = input.argument_or("host", Value::Null);
            let port = input.argument_or("port", Value::Null);
            let force = input.argument_or("force", Value::Null);
            output.write_line(&format!("deploy {host}:{port} force={force}"), &[], &[]);
            Ok(())
        }
    }

    #[test]
    fn test_full_pipeline_binds_arguments_options_and_defaults() {
        let mut app = Application::new("test", "0.0");
        app.register_command(Box::new(Deploy::new())).unwrap();

        // host from a long argument, port from a short option, force defaulted.
        let mut sink = Recorder::default();
        let ok = app.run(
            &argv(&["tk", "ops:deploy", "--host=db1", "-port=9000"]),
            &mut sink,
        );

        assert!(ok);
        assert_eq!(sink.lines(), vec!["deploy db1:9000 force=false"]);
    }

    #[test]
    fn test_required_parameter_missing_halts_before_execution() {
        let mut app = Application::new("test", "0.0");
        app.register_command(Box::new(Deploy::new())).unwrap();

        let mut sink = Recorder::default();
        let ok = app.run(&argv(&["tk", "ops:deploy", "--port=9000"]), &mut sink);

        assert!(!ok);
        assert_eq!(sink.error_lines().len(), 1);
        assert!(sink.buffer.contains("--host"));
        // The handler never ran.
        assert!(!sink.buffer.contains("deploy"));
    }

    #[test]
    fn test_type_mismatch_on_optional_parameter_uses_default() {
        let mut app = Application::new("test", "0.0");
        app.register_command(Box::new(Deploy::new())).unwrap();

        let mut sink = Recorder::default();
        let ok = app.run(
            &argv(&["tk", "ops:deploy", "--host=db1", "--port=high"]),
            &mut sink,
        );

        assert!(ok);
        assert_eq!(sink.lines(), vec!["deploy db1:8080 force=false"]);
    }

    #[test]
    fn test_type_mismatch_on_required_parameter_halts() {
        let mut app = Application::new("test", "0.0");
        app.register_command(Box::new(Deploy::new())).unwrap();

        // "--host=null" coerces to Null, which the STRING kind rejects.
        let mut sink = Recorder::default();
        let ok = app.run(&argv(&["tk", "ops:deploy", "--host=null"]), &mut sink);

        assert!(!ok);
        assert_eq!(sink.error_lines().len(), 1);
    }

    #[test]
    fn test_help_lists_commands_without_invoking_handlers() {
        let executed = Rc::new(Cell::new(false));
        let seen = Rc::clone(&executed);

        let mut app = Application::new("test", "0.0");
        app.register_command(Box::new(Deploy::new())).unwrap();
        app.register("status", "Shows status.", move |_, _| {
            seen.set(true);
            Ok(())
        })
        .unwrap();

        let mut sink = Recorder::default();
        assert!(app.run(&argv(&["tk", "help"]), &mut sink));

        assert!(!executed.get());
        assert!(sink.buffer.contains("ops:deploy"));
        assert!(sink.buffer.contains("status"));
        // Grouped under the `ops` prefix heading.
        assert!(sink.lines().contains(&"ops"));
    }

    #[test]
    fn test_help_argument_renders_usage_instead_of_executing() {
        let mut app = Application::new("test", "0.0");
        app.register_command(Box::new(Deploy::new())).unwrap();

        let mut sink = Recorder::default();
        assert!(app.run(&argv(&["tk", "ops:deploy", "--help"]), &mut sink));

        assert!(!sink.buffer.contains("deploy db1"));
        assert!(sink.buffer.contains("[PARAMETERS]"));
        assert!(sink.buffer.contains("--host"));
        assert!(sink.buffer.contains("[USAGE]"));
        // Required parameters come before optional ones in the usage line.
        assert!(sink.buffer.contains(
            "\ttk ops:deploy --host=(STRING) [--port=(INT)8080] [--force=(BOOL)false]"
        ));
    }

    #[test]
    fn test_handler_error_never_escapes_run() {
        let mut app = Application::new("test", "0.0");
        app.register("boom", "", |_, output| {
            output.write_line("partial work", &[], &[]);
            Err(Error::Misc("exploded mid-execution".to_string()))
        })
        .unwrap();

        let mut sink = Recorder::default();
        let ok = app.run(&argv(&["tk", "boom"]), &mut sink);

        assert!(!ok);
        assert_eq!(sink.error_lines().len(), 1);
        assert!(sink.buffer.contains("exploded mid-execution"));
    }

    #[test]
    fn test_unknown_command_fails_and_process_can_continue() {
        let mut app = Application::new("test", "0.0");
        app.register("status", "Shows status.", |_, output| {
            output.write_line("ok", &[], &[]);
            Ok(())
        })
        .unwrap();

        let mut sink = Recorder::default();
        assert!(!app.run(&argv(&["tk", "statsu"]), &mut sink));
        assert_eq!(sink.error_lines().len(), 1);

        // The registry is untouched; the next dispatch still works.
        let mut sink = Recorder::default();
        assert!(app.run(&argv(&["tk", "status"]), &mut sink));
        assert_eq!(sink.lines(), vec!["ok"]);
    }

    #[test]
    fn test_ask_and_progress_flow_through_the_sink() {
        let mut app = Application::new("test", "0.0");
        app.register("sync", "Synchronizes things.", |_, output| {
            let answer = output.ask("How many items?")?;
            let total: f64 = answer
                .parse()
                .map_err(|_| Error::Misc("not a number".to_string()))?;
            for step in 0..=total as u64 {
                output.progress_bar(step as f64, total);
            }
            output.success("synchronized");
            Ok(())
        })
        .unwrap();

        let mut sink = Recorder::with_answers(&["3"]);
        assert!(app.run(&argv(&["tk", "sync"]), &mut sink));

        assert_eq!(sink.progress.len(), 4);
        assert_eq!(sink.progress[0], (0.0, 3.0));
        assert_eq!(sink.progress[3], (3.0, 3.0));
        assert!(sink.buffer.contains("[SUCCESS] synchronized"));
    }
}
