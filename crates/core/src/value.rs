//! Primitive values carried through classification and validation.
//!
//! Every raw token is coerced once, at classification time, into its
//! best-fit [`Value`]. Everything downstream (kind checks, table cells,
//! handler accessors) works on the coerced value and never re-parses text.

use std::fmt::{Display, Formatter};

/// A coerced primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Coerces raw token text into its best-fit value.
    ///
    /// The literal `null` becomes [`Value::Null`]; `true`/`yes` and
    /// `false`/`no` become booleans (all case-insensitive). Integer literals
    /// parse to [`Value::Int`] and decimal literals (either `.` or `,` as the
    /// separator) to [`Value::Float`]. Anything else, including the empty
    /// string, stays a [`Value::Str`].
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Str(String::new());
        }

        match raw.to_ascii_lowercase().as_str() {
            "null" => return Self::Null,
            "true" | "yes" => return Self::Bool(true),
            "false" | "no" => return Self::Bool(false),
            _ => {}
        }

        if let Ok(int) = raw.parse::<i64>() {
            return Self::Int(int);
        }

        if is_decimal_literal(raw) {
            if let Ok(float) = raw.replace(',', ".").parse::<f64>() {
                return Self::Float(float);
            }
        }

        Self::Str(raw.to_string())
    }

    /// `Null` and the empty string count as empty; everything else, including
    /// `false` and `0`, does not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(text) => text.is_empty(),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(true) => formatter.write_str("true"),
            Self::Bool(false) => formatter.write_str("false"),
            Self::Int(int) => write!(formatter, "{int}"),
            Self::Float(float) => write!(formatter, "{float}"),
            Self::Str(text) => formatter.write_str(text),
        }
    }
}

/// A decimal literal is an optional single sign, at least one digit, exactly
/// one `.` or `,` separator, and at least one more digit. Nothing looser
/// (exponents, thousands grouping, leading separators) qualifies.
fn is_decimal_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);

    let Some((whole, fraction)) = unsigned
        .split_once('.')
        .or_else(|| unsigned.split_once(','))
    else {
        return false;
    };

    !whole.is_empty()
        && !fraction.is_empty()
        && whole.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit())
}
