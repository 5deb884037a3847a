use tracing::trace;

use crate::{
    error::{ConfigError, ConfigResult},
    translator::{
        lexer::{Token, tokenize},
        value::core::Value,
    },
    util::num::{parse_integer_literal, parse_real_literal},
};

/// Opening delimiter of an array literal.
pub const ARRAY_OPEN: &str = "<<";
/// Closing delimiter of an array literal.
pub const ARRAY_CLOSE: &str = ">>";
/// Separator between array elements.
pub const ARRAY_SEPARATOR: char = ',';
/// Deepest array nesting a literal may have.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a value literal.
///
/// Grammar: `value := integer | decimal | "<<" (value ("," value)*)? ">>"`
///
/// The text is trimmed first. Numbers must be a single integer or decimal
/// token spanning the whole text. For arrays, the interior between `<<` and
/// `>>` is split on every comma regardless of nesting and each piece is
/// parsed recursively, so an inner array may only hold a single element
/// (`<<<<1>>, 2>>` parses, `<<<<1, 2>>>>` does not). An empty or
/// whitespace-only interior is an empty array. Arrays may nest at most
/// [`MAX_NESTING_DEPTH`] levels deep.
///
/// # Parameters
/// - `text`: The literal text.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The parsed [`Value`].
///
/// # Errors
/// - `InvalidValue` if the text, or any array element, is not a literal.
/// - `NestingTooDeep` if arrays nest deeper than [`MAX_NESTING_DEPTH`].
///
/// # Example
/// ```
/// use cfgxml::{Value, translator::parser::literal::parse_value};
///
/// let v = parse_value("<<1, 2.5, <<-3>>>>", 1).unwrap();
/// assert_eq!(v,
///            Value::Array(vec![Value::from(1_i64),
///                              Value::Real(2.5),
///                              Value::from(vec![-3_i64])]));
///
/// assert!(parse_value("true", 1).is_err());
/// ```
pub fn parse_value(text: &str, line: usize) -> ConfigResult<Value> {
    parse_nested(text, line, 0)
}

/// Parses a literal found inside `depth` enclosing arrays.
fn parse_nested(text: &str, line: usize, depth: usize) -> ConfigResult<Value> {
    let text = text.trim();

    if let Some(value) = parse_number(text, line)? {
        return Ok(value);
    }
    if let Some(interior) = text.strip_prefix(ARRAY_OPEN)
                                .and_then(|rest| rest.strip_suffix(ARRAY_CLOSE))
    {
        if depth >= MAX_NESTING_DEPTH {
            return Err(ConfigError::NestingTooDeep { line });
        }
        return parse_array_interior(interior, line, depth + 1);
    }

    Err(ConfigError::InvalidValue { text: text.to_string(),
                                    line })
}

/// Parses an integer or decimal literal.
///
/// Returns `Ok(None)` if the text is not exactly one number token.
fn parse_number(text: &str, line: usize) -> ConfigResult<Option<Value>> {
    match tokenize(text).as_deref() {
        Some([Token::Integer]) => Ok(Some(Value::Integer(parse_integer_literal(text, line)?))),
        Some([Token::Decimal]) => Ok(Some(Value::Real(parse_real_literal(text, line)?))),
        _ => Ok(None),
    }
}

fn parse_array_interior(interior: &str, line: usize, depth: usize) -> ConfigResult<Value> {
    if interior.trim().is_empty() {
        trace!(line, depth, "empty array literal");
        return Ok(Value::Array(Vec::new()));
    }

    let items = interior.split(ARRAY_SEPARATOR)
                        .map(|item| parse_nested(item, line, depth))
                        .collect::<ConfigResult<Vec<_>>>()?;

    Ok(Value::Array(items))
}
