use crate::translator::value::core::Value;

/// Element name of a constant declaration in the XML output.
pub const CONSTANT_TAG: &str = "constant";
/// Element name of an evaluation in the XML output.
pub const EVALUATION_TAG: &str = "evaluation";

/// One entry of the intermediate representation.
///
/// A parsed document is an ordered `Vec<Entry>` in source line order. Both
/// variants own their value: an evaluation holds a copy of the constant as it
/// was when the directive was read.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A constant declaration.
    Constant {
        /// Name of the constant.
        name:  String,
        /// The declared value.
        value: Value,
    },
    /// An evaluation of a previously declared constant.
    Evaluation {
        /// Name of the constant.
        name:  String,
        /// Snapshot of the constant's value.
        value: Value,
    },
}

impl Entry {
    /// Creates a constant declaration entry.
    ///
    /// # Example
    /// ```
    /// use cfgxml::{Entry, Value};
    ///
    /// let entry = Entry::constant("depth", 3_i64);
    /// assert_eq!(entry.name(), "depth");
    /// assert_eq!(entry.value(), &Value::from(3_i64));
    /// ```
    pub fn constant(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Constant { name:  name.into(),
                         value: value.into(), }
    }

    /// Creates an evaluation entry.
    pub fn evaluation(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Evaluation { name:  name.into(),
                           value: value.into(), }
    }

    /// Returns the constant name the entry refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Constant { name, .. } | Self::Evaluation { name, .. } => name,
        }
    }

    /// Returns the entry's value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::Constant { value, .. } | Self::Evaluation { value, .. } => value,
        }
    }

    /// Returns the XML element name used for this entry.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Constant { .. } => CONSTANT_TAG,
            Self::Evaluation { .. } => EVALUATION_TAG,
        }
    }
}
