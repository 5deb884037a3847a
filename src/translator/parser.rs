/// Document-level parsing.
///
/// Walks the source line by line, tracks block comments, skips blank and
/// comment lines, and feeds every remaining line through the statement parser
/// and the namespace.
pub mod core;

/// Value literal parsing.
///
/// Recursive descent over number and array literals.
pub mod literal;

/// Statement parsing.
///
/// Recognises constant declarations and evaluation directives and reports
/// everything else as a syntax error.
pub mod statement;

/// Helpers shared by the statement recognisers.
pub mod utils;
