use logos::Lexer;

use crate::translator::lexer::Token;

/// Pulls the next token and returns it as an identifier name.
///
/// The keyword `var` is itself a valid constant name, so a `Token::Var` in
/// identifier position is accepted as well. Any other token, a lexing error,
/// or the end of input yields `None`.
pub(in crate::translator::parser) fn next_identifier(lexer: &mut Lexer<'_, Token>)
                                                     -> Option<String> {
    match lexer.next() {
        Some(Ok(Token::Identifier(name))) => Some(name),
        Some(Ok(Token::Var)) => Some(lexer.slice().to_string()),
        _ => None,
    }
}

/// Consumes the next token if it is the expected one.
///
/// Returns `true` if `expected` was found. A mismatch still consumes the
/// token; recognisers give up on the whole line in that case.
pub(in crate::translator::parser) fn next_is(lexer: &mut Lexer<'_, Token>, expected: &Token)
                                             -> bool {
    matches!(lexer.next(), Some(Ok(ref token)) if token == expected)
}
