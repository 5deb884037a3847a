/// Numeric literal helpers.
///
/// This module converts validated literal text into `BigInt` and `f64`
/// values and renders reals back into their canonical textual form. The
/// conversion routines return a `ConfigResult` so that a malformed literal
/// surfaces as a regular configuration error.
pub mod num;
