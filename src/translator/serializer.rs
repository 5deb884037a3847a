/// IR to XML tree walk.
///
/// Renders entries and their values into the `config` document.
pub mod core;

/// Low-level XML output.
///
/// An element-only writer with escaping, optional indentation, and an
/// optional declaration, plus the `XmlOptions` that control the layout.
pub mod writer;
