use logos::Logos;

use crate::{
    ast::Statement,
    error::{ConfigError, ConfigResult},
    translator::{
        lexer::Token,
        parser::{
            literal::parse_value,
            utils::{next_identifier, next_is},
        },
    },
};

/// Parses a single trimmed, non-comment line.
///
/// A statement is one of:
/// - a constant declaration, `var <identifier> := <value>`.
/// - an evaluation directive, `![<identifier>]`.
///
/// Parsing is attempted in that order. A line matching neither form is a
/// syntax error quoting the line, including near-misses such as `var x = 1`.
///
/// # Parameters
/// - `text`: The line with surrounding whitespace removed.
/// - `line`: The 1-based source line number.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// - `SyntaxError` if the line has no recognisable form.
/// - Any error raised while parsing a declaration's value.
pub fn parse_statement(text: &str, line: usize) -> ConfigResult<Statement> {
    if let Some(statement) = parse_declaration(text, line)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_evaluation(text, line) {
        return Ok(statement);
    }

    Err(ConfigError::SyntaxError { text: text.to_string(),
                                   line })
}

/// Parses a constant declaration of the form `var <identifier> := <value>`.
///
/// `var` must be followed by at least one whitespace character; whitespace
/// around `:=` is optional. Everything after `:=` is handed to
/// [`parse_value`] untouched by the lexer and must not be empty.
///
/// If the line does not have the shape of a declaration, this function
/// returns `Ok(None)` so that the next recogniser can try.
///
/// # Errors
/// Returns a `ConfigError` if the shape matches but the value is malformed.
fn parse_declaration(text: &str, line: usize) -> ConfigResult<Option<Statement>> {
    let mut lexer = Token::lexer(text);

    if !next_is(&mut lexer, &Token::Var) || !next_is(&mut lexer, &Token::Whitespace) {
        return Ok(None);
    }
    let Some(name) = next_identifier(&mut lexer) else {
        return Ok(None);
    };

    let mut next = lexer.next();
    if let Some(Ok(Token::Whitespace)) = next {
        next = lexer.next();
    }
    if next != Some(Ok(Token::Walrus)) {
        return Ok(None);
    }

    let rest = lexer.remainder().trim();
    if rest.is_empty() {
        return Ok(None);
    }

    let value = parse_value(rest, line)?;
    Ok(Some(Statement::Declaration { name, value, line }))
}

/// Parses an evaluation directive of the form `![<identifier>]`.
///
/// The directive admits no whitespace inside the brackets. Only the start of
/// the line has to match: whatever follows the closing bracket is ignored,
/// so `![g] // note` evaluates `g`.
fn parse_evaluation(text: &str, line: usize) -> Option<Statement> {
    let mut lexer = Token::lexer(text);

    if !next_is(&mut lexer, &Token::EvalOpen) {
        return None;
    }
    let name = next_identifier(&mut lexer)?;
    if !next_is(&mut lexer, &Token::RBracket) {
        return None;
    }

    Some(Statement::Evaluation { name, line })
}
