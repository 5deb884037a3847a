use num::BigInt;

use crate::util::num::format_real;

/// Represents a constant's value.
///
/// A value is either a number, kept as `Integer` or `Real` depending on how
/// its literal was written, or an array of further values. Arrays may nest
/// arbitrarily deep and may be empty.
///
/// Values own their elements, so cloning one produces an independent
/// snapshot; later redeclarations never reach back into it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A decimal literal (double precision floating-point).
    Real(f64),
    /// An integer literal, kept at full precision.
    Integer(BigInt),
    /// An ordered array of `Value` elements.
    Array(Vec<Self>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v.into())
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl Value {
    /// Returns the elements of an array value, or `None` for numbers.
    ///
    /// # Example
    /// ```
    /// use cfgxml::Value;
    ///
    /// let v = Value::from(vec![1_i64, 2]);
    /// assert_eq!(v.as_slice().map(<[Value]>::len), Some(2));
    /// assert!(Value::from(3_i64).as_slice().is_none());
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nesting depth of the value.
    ///
    /// Numbers have depth 0; an array is one deeper than its deepest element,
    /// so an empty array has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.as_slice()
            .map_or(0, |items| 1 + items.iter().map(Self::depth).max().unwrap_or(0))
    }
}

/// Formats values using the literal syntax of the configuration language,
/// e.g. `<<1, 2.5, <<3>>>>`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{}", format_real(*r)),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Array(items) => {
                write!(f, "<<")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, ">>")
            },
        }
    }
}
