/// Constant namespace and statement evaluation.
///
/// Holds the constants declared so far in one document and turns parsed
/// statements into IR entries, resolving evaluation directives against the
/// declared values.
pub mod core;
