use crate::translator::value::core::Value;

/// A single recognised line of configuration source.
///
/// Statements are produced by the parser and consumed by the namespace, which
/// turns them into IR entries. Blank lines and comments never become
/// statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `var <name> := <value>`
    Declaration {
        /// Name of the constant.
        name:  String,
        /// The parsed literal.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// `![<name>]`
    Evaluation {
        /// Name of the referenced constant.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}
