/// XML declaration emitted when requested.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Layout options for the generated document.
///
/// The default is the compact layout: no declaration and no whitespace
/// between elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent:      Option<usize>,
    /// Prefix the document with an XML declaration.
    pub declaration: bool,
}

/// Streaming writer for element-only XML.
///
/// Elements are opened and closed in strict nesting order; the writer keeps
/// the stack of open elements to emit matching end tags and to compute the
/// indentation depth.
pub struct XmlWriter<'o> {
    buffer:  String,
    options: &'o XmlOptions,
    open:    Vec<&'static str>,
}

impl<'o> XmlWriter<'o> {
    /// Creates a writer, emitting the declaration right away if enabled.
    #[must_use]
    pub fn new(options: &'o XmlOptions) -> Self {
        let mut buffer = String::new();
        if options.declaration {
            buffer.push_str(XML_DECLARATION);
            buffer.push('\n');
        }

        Self { buffer,
               options,
               open: Vec::new() }
    }

    /// Writes a start tag and descends into the element.
    pub fn open(&mut self, tag: &'static str, attributes: &[(&str, &str)]) {
        self.break_line();
        self.start_tag(tag, attributes);
        self.buffer.push('>');
        self.open.push(tag);
    }

    /// Writes the end tag of the innermost open element.
    pub fn close(&mut self) {
        debug_assert!(!self.open.is_empty(), "close() without matching open()");
        let Some(tag) = self.open.pop() else {
            return;
        };

        self.break_line();
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    /// Writes a self-closing element, e.g. `<array />`.
    pub fn empty(&mut self, tag: &'static str, attributes: &[(&str, &str)]) {
        self.break_line();
        self.start_tag(tag, attributes);
        self.buffer.push_str(" />");
    }

    /// Writes an element holding only text, kept on one line.
    pub fn leaf(&mut self, tag: &'static str, text: &str) {
        self.break_line();
        self.buffer.push('<');
        self.buffer.push_str(tag);
        self.buffer.push('>');
        escape_text(text, &mut self.buffer);
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    /// Returns the finished document.
    #[must_use]
    pub fn finish(self) -> String {
        debug_assert!(self.open.is_empty(), "unclosed elements: {:?}", self.open);
        self.buffer
    }

    fn start_tag(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.buffer.push('<');
        self.buffer.push_str(tag);

        for (name, value) in attributes {
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            escape_attribute(value, &mut self.buffer);
            self.buffer.push('"');
        }
    }

    fn break_line(&mut self) {
        let Some(width) = self.options.indent else {
            return;
        };

        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer.push_str(&" ".repeat(width * self.open.len()));
    }
}

/// Escapes character data.
pub fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Escapes an attribute value for use between double quotes.
pub fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#09;"),
            _ => out.push(c),
        }
    }
}
