//! Classification of raw process arguments.
//!
//! A raw token vector is split in a single left-to-right pass into three
//! disjoint groups:
//!
//! - **arguments**: long-form tokens (`--name` or `--name=value`)
//! - **options**: short-form tokens (`-x`, a cluster `-xyz`, or `-x=value`)
//! - **segments**: everything else, kept in positional order
//!
//! Two single-dash flavors exist in the wild and both are supported. The
//! canonical [`ShortOptionStyle::Cluster`] rule expands `-xyz` into one entry
//! per character plus a whole-cluster entry and never consumes the following
//! token. The alternate [`ShortOptionStyle::Lookahead`] rule instead treats
//! the next token as the option's value unless it starts with a dash. They
//! never coexist within one parse.

use indexmap::IndexMap;

use crate::value::Value;

/// How bare single-dash tokens are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortOptionStyle {
    /// `-xyz` enables `x`, `y`, `z` and the literal cluster key. Default.
    #[default]
    Cluster,
    /// `-name value` takes the next token as the value; a following dash
    /// token (or nothing) leaves the option present-with-empty.
    Lookahead,
}

/// The classified view of one invocation's tokens.
///
/// Validators receive `&mut Input` and write resolved values back through
/// [`Input::set_argument`]; handlers receive `&Input` and can no longer
/// mutate it.
#[derive(Debug, Clone, Default)]
pub struct Input {
    arguments: IndexMap<String, Value>,
    options: IndexMap<String, Value>,
    segments: Vec<Value>,
}

impl Input {
    /// Classifies tokens using the canonical cluster rule.
    #[must_use]
    pub fn parse(tokens: &[String]) -> Self {
        Self::parse_with(tokens, ShortOptionStyle::Cluster)
    }

    /// Classifies tokens with an explicit single-dash style.
    ///
    /// Tokens that are empty after stripping dashes and whitespace are
    /// discarded. A bare long flag is stored as present-with-empty-string,
    /// not `Null`. Duplicate long flags keep the last value.
    #[must_use]
    pub fn parse_with(tokens: &[String], style: ShortOptionStyle) -> Self {
        let mut input = Self::default();

        let mut index = 0;
        while index < tokens.len() {
            let token = tokens[index].as_str();
            index += 1;

            if token
                .trim_matches(|c: char| c == '-' || c.is_whitespace())
                .is_empty()
            {
                continue;
            }

            if let Some(stripped) = token.strip_prefix("--") {
                let stripped = stripped.trim_start_matches('-');
                match stripped.split_once('=') {
                    Some((key, value)) => {
                        input
                            .arguments
                            .insert(key.to_string(), Value::coerce(value));
                    }
                    None => {
                        input
                            .arguments
                            .insert(stripped.to_string(), Value::Str(String::new()));
                    }
                }
                continue;
            }

            if let Some(stripped) = token.strip_prefix('-') {
                match stripped.split_once('=') {
                    Some((key, value)) => {
                        input.options.insert(key.to_string(), Value::coerce(value));
                    }
                    None => match style {
                        ShortOptionStyle::Cluster => {
                            if !input.options.contains_key(stripped) {
                                input
                                    .options
                                    .insert(stripped.to_string(), Value::Str(String::new()));
                            }
                            // Each character is a self-valued marker, not coerced.
                            for flag in stripped.chars() {
                                input
                                    .options
                                    .insert(flag.to_string(), Value::Str(flag.to_string()));
                            }
                        }
                        ShortOptionStyle::Lookahead => {
                            let value = match tokens.get(index) {
                                Some(next) if !next.starts_with('-') => {
                                    index += 1;
                                    Value::coerce(next)
                                }
                                _ => Value::Str(String::new()),
                            };
                            input.options.insert(stripped.to_string(), value);
                        }
                    },
                }
                continue;
            }

            input.segments.push(Value::coerce(token));
        }

        input
    }

    #[must_use]
    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    /// Returns the named argument, or `default` when absent.
    #[must_use]
    pub fn argument_or(&self, name: &str, default: Value) -> Value {
        self.arguments.get(name).cloned().unwrap_or(default)
    }

    #[must_use]
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    #[must_use]
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    #[must_use]
    pub fn options(&self) -> &IndexMap<String, Value> {
        &self.options
    }

    #[must_use]
    pub fn has_segment(&self, index: usize) -> bool {
        index < self.segments.len()
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&Value> {
        self.segments.get(index)
    }

    /// Returns the positional segment at `index`, or `default` when absent.
    #[must_use]
    pub fn segment_or(&self, index: usize, default: Value) -> Value {
        self.segments.get(index).cloned().unwrap_or(default)
    }

    #[must_use]
    pub fn segments(&self) -> &[Value] {
        &self.segments
    }

    /// Writes a resolved value into the arguments map, overwriting any prior
    /// entry. This is how validation leaves handlers one uniform view no
    /// matter whether a value arrived as an argument, an option, or a
    /// default.
    pub fn set_argument(&mut self, name: impl Into<String>, value: Value) {
        self.arguments.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_every_token_lands_in_exactly_one_group() {
        let input = Input::parse(&tokens(&["--host=db", "-v", "migrate", "--force", "7"]));
        assert_eq!(input.arguments().len(), 2);
        // `-v`: the single-char cluster key and the char entry collapse.
        assert_eq!(input.options().len(), 1);
        assert_eq!(input.segments().len(), 2);
    }

    #[test]
    fn test_long_argument_with_value_is_coerced() {
        let input = Input::parse(&tokens(&["--port=8080", "--ratio=0.5", "--dry=true"]));
        assert_eq!(input.argument("port"), Some(&Value::Int(8080)));
        assert_eq!(input.argument("ratio"), Some(&Value::Float(0.5)));
        assert_eq!(input.argument("dry"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_bare_long_flag_is_present_with_empty_value() {
        let input = Input::parse(&tokens(&["--force"]));
        assert!(input.has_argument("force"));
        assert_eq!(input.argument("force"), Some(&Value::Str(String::new())));
    }

    #[test]
    fn test_duplicate_long_flag_keeps_last_value() {
        let input = Input::parse(&tokens(&["--a=1", "--a=2"]));
        assert_eq!(input.argument("a"), Some(&Value::Int(2)));
        assert_eq!(input.arguments().len(), 1);
    }

    #[test]
    fn test_cluster_expands_each_character() {
        let input = Input::parse(&tokens(&["-xyz"]));
        assert_eq!(input.option("xyz"), Some(&Value::Str(String::new())));
        assert_eq!(input.option("x"), Some(&Value::Str("x".to_string())));
        assert_eq!(input.option("y"), Some(&Value::Str("y".to_string())));
        assert_eq!(input.option("z"), Some(&Value::Str("z".to_string())));
    }

    #[test]
    fn test_cluster_does_not_consume_following_token() {
        let input = Input::parse(&tokens(&["-v", "verbose"]));
        assert_eq!(input.option("v"), Some(&Value::Str("v".to_string())));
        assert_eq!(input.segment(0), Some(&Value::Str("verbose".to_string())));
    }

    #[test]
    fn test_short_option_with_equals_value() {
        let input = Input::parse(&tokens(&["-n=3"]));
        assert_eq!(input.option("n"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_lookahead_takes_next_token_as_value() {
        let input = Input::parse_with(
            &tokens(&["-host", "localhost", "-v", "-n", "-quiet"]),
            ShortOptionStyle::Lookahead,
        );
        assert_eq!(
            input.option("host"),
            Some(&Value::Str("localhost".to_string()))
        );
        // `-v` is followed by another dash token, so it stays empty.
        assert_eq!(input.option("v"), Some(&Value::Str(String::new())));
        assert_eq!(input.option("quiet"), Some(&Value::Str(String::new())));
        // Consumed value tokens never become segments.
        assert!(input.segments().is_empty());
    }

    #[test]
    fn test_dash_only_and_blank_tokens_are_discarded() {
        let input = Input::parse(&tokens(&["-", "--", "---", "  ", ""]));
        assert!(input.arguments().is_empty());
        assert!(input.options().is_empty());
        assert!(input.segments().is_empty());
    }

    #[test]
    fn test_segments_keep_order_and_duplicates() {
        let input = Input::parse(&tokens(&["a", "2", "a"]));
        assert_eq!(
            input.segments(),
            &[
                Value::Str("a".to_string()),
                Value::Int(2),
                Value::Str("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_argument_overwrites() {
        let mut input = Input::parse(&tokens(&["--mode=fast"]));
        input.set_argument("mode", Value::Str("safe".to_string()));
        assert_eq!(input.argument("mode"), Some(&Value::Str("safe".to_string())));
    }
}
