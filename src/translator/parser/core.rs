use tracing::{debug, trace};

use crate::{
    error::ConfigResult,
    ir::Entry,
    translator::{evaluator::core::Namespace, parser::statement::parse_statement},
};

/// Marker opening a block comment at the start of a line.
pub const BLOCK_COMMENT_START: &str = "{{!--";
/// Marker closing a block comment at the end of a line.
pub const BLOCK_COMMENT_END: &str = "--}}";
/// Marker of a single-line comment.
pub const LINE_COMMENT: &str = "//";
/// Characters that end a line. `\r\n` counts as a single break.
pub const LINE_BREAKS: [char; 10] = ['\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}',
                                     '\u{85}', '\u{2028}', '\u{2029}'];

/// Parses a configuration document into its IR entries.
///
/// The source is split at every [`LINE_BREAKS`] character and processed
/// line by line in a single pass. Each line is trimmed, then:
///
/// 1. A line starting with `{{!--` opens a block comment; it and every line
///    up to and including one ending with `--}}` are skipped unchecked. A
///    block that is never closed swallows the rest of the document.
/// 2. Blank lines and lines starting with `//` are skipped.
/// 3. Anything else is parsed as a statement and evaluated against a
///    namespace that lives only for this call.
///
/// Parsing is all-or-nothing: the first error is returned and no entries are
/// produced.
///
/// # Parameters
/// - `source`: The whole document.
///
/// # Returns
/// The entries in source order.
///
/// # Errors
/// Returns the first `ConfigError` encountered.
pub fn parse_config(source: &str) -> ConfigResult<Vec<Entry>> {
    let mut namespace = Namespace::new();
    let mut entries = Vec::new();
    let mut comment_opened_at = None;

    for (index, raw) in source_lines(source).enumerate() {
        let line = index + 1;
        let text = raw.trim();

        if comment_opened_at.is_none() && text.starts_with(BLOCK_COMMENT_START) {
            debug!(line, "block comment opened");
            comment_opened_at = Some(line);
        }
        if comment_opened_at.is_some() {
            if text.ends_with(BLOCK_COMMENT_END) {
                debug!(line, "block comment closed");
                comment_opened_at = None;
            }
            continue;
        }

        if text.is_empty() || text.starts_with(LINE_COMMENT) {
            trace!(line, "skipped line");
            continue;
        }

        let statement = parse_statement(text, line)?;
        entries.push(namespace.eval_statement(statement)?);
    }

    if let Some(opened) = comment_opened_at {
        debug!(opened, "block comment still open at end of input");
    }
    debug!(entries = entries.len(), constants = namespace.len(), "parsed configuration");

    Ok(entries)
}

/// Splits `source` into lines without their terminators.
///
/// A trailing break does not start an extra empty line.
fn source_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = source;

    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let Some(at) = rest.find(LINE_BREAKS) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..at];
        let tail = &rest[at..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];

        Some(line)
    })
}
