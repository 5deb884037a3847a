/// The evaluator module resolves statements against the constant namespace.
///
/// # Responsibilities
/// - Owns the per-document map of declared constants.
/// - Turns declarations and evaluations into IR entries.
/// - Reports references to undefined constants.
pub mod evaluator;
/// The lexer module tokenizes configuration lines.
///
/// # Responsibilities
/// - Recognises keywords, punctuation, identifiers, whitespace runs and
///   number literals.
/// - Leaves declaration values untouched so the literal parser sees raw text.
pub mod lexer;
/// The parser module turns source text into statements and values.
///
/// # Responsibilities
/// - Walks the document line by line, skipping blank lines and comments.
/// - Recognises declarations and evaluation directives.
/// - Parses number and array literals recursively.
pub mod parser;
/// The serializer module renders IR entries as XML.
///
/// # Responsibilities
/// - Maps entries and values onto the `config` element tree.
/// - Escapes text and attributes and applies the requested layout.
pub mod serializer;
/// The value module defines constant values.
///
/// # Responsibilities
/// - Defines the `Value` enum of integers, reals and arrays.
/// - Prints values in literal syntax.
pub mod value;
