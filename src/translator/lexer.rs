use logos::Logos;

/// Represents a lexical token of a single configuration line.
///
/// Lines are tokenized lazily: recognisers pull tokens one at a time and stop
/// as soon as the line form is decided, so the value text of a declaration is
/// never fed through the lexer. Whitespace is a token of its own because the
/// grammar requires it after `var` and forbids it inside `![name]`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `var`
    #[token("var")]
    Var,
    /// `:=`
    #[token(":=")]
    Walrus,
    /// `![`
    #[token("![")]
    EvalOpen,
    /// `]`
    #[token("]")]
    RBracket,
    /// Decimal literal tokens, such as `3.14` or `-0.5`.
    #[regex(r"-?[0-9]+\.[0-9]+")]
    Decimal,
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+")]
    Integer,
    /// Identifier tokens; constant names such as `pi` or `max_depth`.
    #[regex(r"[a-zA-Z][_a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Runs of Unicode whitespace, such as spaces, tabs or no-break spaces.
    #[regex(r"\s+")]
    Whitespace,
}

/// Splits a line into its tokens.
///
/// Returns `None` if any part of the text is not a token. The literal parser
/// uses this to recognise a number that spans the whole value text.
///
/// # Example
/// ```
/// use cfgxml::translator::lexer::{Token, tokenize};
///
/// let tokens = tokenize("![pi]").unwrap();
/// assert_eq!(tokens,
///            vec![Token::EvalOpen, Token::Identifier("pi".to_string()), Token::RBracket]);
///
/// assert!(tokenize("<<1, 2>>").is_none());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Option<Vec<Token>> {
    Token::lexer(text).collect::<Result<Vec<_>, _>>().ok()
}
