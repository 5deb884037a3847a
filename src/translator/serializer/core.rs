use tracing::debug;

use crate::{
    ir::Entry,
    translator::{
        serializer::writer::{XmlOptions, XmlWriter},
        value::core::Value,
    },
};

/// Root element of every generated document.
pub const ROOT_TAG: &str = "config";
/// Element wrapping the elements of an array.
pub const ARRAY_TAG: &str = "array";
/// Leaf element holding a number.
pub const VALUE_TAG: &str = "value";
/// Attribute carrying the constant name on entry elements.
pub const NAME_ATTRIBUTE: &str = "name";

/// Serializes entries into a compact XML document.
///
/// Equivalent to [`generate_xml_with`] with default options.
///
/// # Example
/// ```
/// use cfgxml::{Entry, generate_xml};
///
/// let xml = generate_xml(&[Entry::constant("numbers", vec![1_i64, 2, 3])]);
/// assert_eq!(xml,
///            concat!("<config><constant name=\"numbers\"><array>",
///                    "<value>1</value><value>2</value><value>3</value>",
///                    "</array></constant></config>"));
/// ```
#[must_use]
pub fn generate_xml(entries: &[Entry]) -> String {
    generate_xml_with(entries, &XmlOptions::default())
}

/// Serializes entries into an XML document laid out according to `options`.
///
/// The root `config` element gets one `constant` or `evaluation` child per
/// entry, in order, each with a `name` attribute. Values are rendered
/// beneath: numbers as `value` leaves, arrays as `array` elements holding
/// their rendered elements. An empty array, and the root of an empty
/// document, self-close.
#[must_use]
pub fn generate_xml_with(entries: &[Entry], options: &XmlOptions) -> String {
    let mut writer = XmlWriter::new(options);

    if entries.is_empty() {
        writer.empty(ROOT_TAG, &[]);
    } else {
        writer.open(ROOT_TAG, &[]);
        for entry in entries {
            writer.open(entry.tag(), &[(NAME_ATTRIBUTE, entry.name())]);
            write_value(&mut writer, entry.value());
            writer.close();
        }
        writer.close();
    }

    let xml = writer.finish();
    debug!(entries = entries.len(), bytes = xml.len(), "generated xml");
    xml
}

fn write_value(writer: &mut XmlWriter<'_>, value: &Value) {
    match value.as_slice() {
        Some([]) => writer.empty(ARRAY_TAG, &[]),
        Some(items) => {
            writer.open(ARRAY_TAG, &[]);
            for item in items {
                write_value(writer, item);
            }
            writer.close();
        },
        None => writer.leaf(VALUE_TAG, &value.to_string()),
    }
}
