//! Declared command parameters and their validation.
//!
//! A [`Parameter`] names one input a command expects, independent of whether
//! the value arrives as a long argument, a short option, or a default. The
//! declaration is validated at construction time; [`Parameter::resolve`] runs
//! at dispatch time and either binds a final value into the input's argument
//! map or halts the whole invocation.

use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};
use crate::input::Input;
use crate::output::Output;
use crate::value::Value;

/// Abort signal from validation: stops further parameter resolution and
/// handler execution for the current invocation. The error line has already
/// been written to the sink when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt;

/// The kind constraint a parameter declares for its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Any,
    Int,
    Float,
    Numeric,
    Bool,
    Str,
}

impl Display for ParameterKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            ParameterKind::Any => "ANY",
            ParameterKind::Int => "INT",
            ParameterKind::Float => "FLOAT",
            ParameterKind::Numeric => "NUMBER",
            ParameterKind::Bool => "BOOL",
            ParameterKind::Str => "STRING",
        })
    }
}

/// One declared command parameter. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    kind: ParameterKind,
    default: Option<Value>,
    required: bool,
    definition: String,
}

impl Parameter {
    /// Declares a parameter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the name is empty or when a
    /// supplied default does not satisfy the declared kind.
    pub fn new(
        name: impl Into<String>,
        kind: ParameterKind,
        default: Option<Value>,
        required: bool,
        definition: &str,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyParameterName);
        }
        if let Some(value) = &default {
            if check_kind(kind, value.clone()).is_none() {
                return Err(Error::DefaultKindMismatch(name));
            }
        }
        Ok(Self {
            name,
            kind,
            default,
            required,
            definition: definition.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name as it appears on the command line.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("--{}", self.name)
    }

    #[must_use]
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    #[must_use]
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Resolves this parameter against the classified input.
    ///
    /// Resolution order: the arguments map, then the options map, then the
    /// default (or a halt when the parameter is required). A candidate value
    /// is kind-checked; on mismatch a required parameter halts while an
    /// optional one silently falls back to its default. A successful but
    /// empty-string value on a required parameter with a default also takes
    /// the default. Whatever wins is written back into the arguments map.
    ///
    /// # Errors
    ///
    /// Returns [`Halt`] after writing exactly one error line to the sink.
    pub fn resolve(&self, input: &mut Input, output: &mut dyn Output) -> std::result::Result<(), Halt> {
        let candidate = input
            .argument(&self.name)
            .or_else(|| input.option(&self.name))
            .cloned();

        let Some(candidate) = candidate else {
            if self.required {
                output.error(&format!(
                    "The {} parameter is required but was not provided.",
                    self.display_name()
                ));
                return Err(Halt);
            }
            input.set_argument(&self.name, self.default_or_null());
            return Ok(());
        };

        let resolved = match check_kind(self.kind, candidate) {
            Some(mut value) => {
                // Empty presence is not a real value for a required parameter.
                if value.is_empty() && self.required {
                    if let Some(default) = &self.default {
                        value = default.clone();
                    }
                }
                value
            }
            None => {
                if self.required {
                    output.error(&format!(
                        "The value given for the {} parameter is invalid.",
                        self.display_name()
                    ));
                    return Err(Halt);
                }
                self.default_or_null()
            }
        };

        input.set_argument(&self.name, resolved);
        Ok(())
    }

    fn default_or_null(&self) -> Value {
        self.default.clone().unwrap_or(Value::Null)
    }
}

/// Checks `value` against `kind`, applying the small coercions the check is
/// allowed to make. Returns the (possibly adjusted) value on a pass.
fn check_kind(kind: ParameterKind, value: Value) -> Option<Value> {
    match kind {
        ParameterKind::Any => Some(value),
        ParameterKind::Bool => match value {
            Value::Bool(_) => Some(value),
            Value::Int(0) => Some(Value::Bool(false)),
            Value::Int(1) => Some(Value::Bool(true)),
            Value::Float(f) if f == 0.0 => Some(Value::Bool(false)),
            Value::Float(f) if f == 1.0 => Some(Value::Bool(true)),
            _ => None,
        },
        // No string-to-number coercion here; that already happened when the
        // token was classified.
        ParameterKind::Int => matches!(value, Value::Int(_)).then_some(value),
        ParameterKind::Float => matches!(value, Value::Float(_)).then_some(value),
        ParameterKind::Numeric => match &value {
            // Looser than coercion: `.5`, `5.`, `1e3` and padded digits
            // stay strings after classification but still count as numeric.
            Value::Str(text) => is_numeric_text(text).then_some(value),
            _ => value.is_numeric().then_some(value),
        },
        ParameterKind::Str => match value {
            Value::Str(_) => Some(value),
            Value::Int(_) | Value::Float(_) | Value::Bool(_) => {
                Some(Value::Str(value.to_string()))
            }
            Value::Null => None,
        },
    }
}

/// Text is numeric when it parses as a finite number after trimming and
/// comma normalization. Infinities and NaN spellings do not qualify.
fn is_numeric_text(text: &str) -> bool {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_or(false, f64::is_finite)
}
