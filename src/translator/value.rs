/// Value representation.
///
/// Defines the `Value` enum: integer and real numbers plus arbitrarily nested
/// arrays. Includes conversions from Rust numbers and vectors and a `Display`
/// implementation that prints values back in literal syntax.
pub mod core;
