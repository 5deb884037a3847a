//! # cfgxml
//!
//! cfgxml translates a small line-oriented configuration language into XML.
//! A document declares constants holding numbers or nested arrays and may
//! echo their current values with evaluation directives:
//!
//! ```text
//! // physical constants
//! var g := 9.81
//! var sizes := <<1, 2, <<3>>>>
//! ![g]
//! ```
//!
//! Translation runs in two steps: [`parse_config`] produces an ordered list
//! of [`Entry`] values, and [`generate_xml`] renders them as a `config`
//! document.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the syntactic form of a configuration line.
///
/// This module declares the `Statement` enum produced by the parser for each
/// declaration or evaluation line before it is checked against the
/// namespace.
pub mod ast;
/// Provides the error type for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `ConfigError` with one variant per failure mode.
/// - Attaches line numbers and the offending text to every error.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Defines the intermediate representation.
///
/// This module declares the `Entry` enum, the ordered output of parsing and
/// the input of XML generation.
pub mod ir;
/// Ties together lexing, parsing, evaluation and serialization.
///
/// # Responsibilities
/// - Coordinates the lexer, the line parser, the namespace and the XML
///   serializer.
/// - Exposes the building blocks behind the top-level API.
pub mod translator;
/// General utilities for numeric literals.
///
/// # Responsibilities
/// - Convert literal text to arbitrary-precision integers and `f64`.
/// - Render reals in their canonical shortest form.
pub mod util;

pub use crate::{
    error::{ConfigError, ConfigResult},
    ir::Entry,
    translator::{
        parser::core::parse_config,
        serializer::{
            core::{generate_xml, generate_xml_with},
            writer::XmlOptions,
        },
        value::core::Value,
    },
};

/// Parses a standalone value literal.
///
/// Errors are reported as if the literal stood on line 1 of a document.
///
/// # Examples
/// ```
/// use cfgxml::{Value, parse_value};
///
/// assert_eq!(parse_value("<<1, 2>>").unwrap(), Value::from(vec![1_i64, 2]));
/// assert!(parse_value("<<1, two>>").is_err());
/// ```
pub fn parse_value(text: &str) -> ConfigResult<Value> {
    translator::parser::literal::parse_value(text, 1)
}

/// Translates a configuration document straight to compact XML.
///
/// This parses the whole source and, if every line is valid, renders the
/// entries. Nothing is rendered when parsing fails.
///
/// # Errors
/// Returns the first `ConfigError` found in the source.
///
/// # Examples
/// ```
/// use cfgxml::translate;
///
/// let xml = translate("var g := 9.81\n![g]").unwrap();
/// assert_eq!(xml,
///            concat!("<config>",
///                    "<constant name=\"g\"><value>9.81</value></constant>",
///                    "<evaluation name=\"g\"><value>9.81</value></evaluation>",
///                    "</config>"));
///
/// // 'x' is not defined
/// assert!(translate("![x]").is_err());
/// ```
pub fn translate(source: &str) -> ConfigResult<String> {
    let entries = parse_config(source)?;
    Ok(generate_xml(&entries))
}
