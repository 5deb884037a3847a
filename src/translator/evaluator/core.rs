use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::Statement,
    error::{ConfigError, ConfigResult},
    ir::Entry,
    translator::value::core::Value,
};

/// Stores the constants declared while parsing one document.
///
/// ## Usage
///
/// A `Namespace` is created fresh for every document and dropped once the
/// last line has been processed, so nothing leaks between documents.
/// Declarations insert or silently overwrite a name; nothing is ever
/// removed.
#[derive(Debug, Default)]
pub struct Namespace {
    /// A mapping from constant names to their current values.
    constants: HashMap<String, Value>,
}

impl Namespace {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a single statement and returns the IR entry it produces.
    ///
    /// Declarations update the namespace; evaluations read from it.
    ///
    /// # Errors
    /// Returns `ConfigError::UndefinedConstant` for an evaluation of a name
    /// that has not been declared.
    ///
    /// # Example
    /// ```
    /// use cfgxml::{Entry, Value, ast::Statement, translator::evaluator::core::Namespace};
    ///
    /// let mut namespace = Namespace::new();
    /// let declaration = Statement::Declaration { name:  "g".to_string(),
    ///                                            value: Value::Real(9.81),
    ///                                            line:  1, };
    /// namespace.eval_statement(declaration).unwrap();
    ///
    /// let evaluation = Statement::Evaluation { name: "g".to_string(),
    ///                                          line: 2, };
    /// let entry = namespace.eval_statement(evaluation).unwrap();
    /// assert_eq!(entry, Entry::evaluation("g", 9.81));
    /// ```
    pub fn eval_statement(&mut self, statement: Statement) -> ConfigResult<Entry> {
        match statement {
            Statement::Declaration { name, value, line } => {
                debug!(line, name = %name, value = %value, "declared constant");
                Ok(self.declare(name, value))
            },
            Statement::Evaluation { name, line } => {
                let entry = self.evaluate(name, line)?;
                debug!(line, name = entry.name(), value = %entry.value(), "evaluated constant");
                Ok(entry)
            },
        }
    }

    /// Binds `name` to `value`, replacing any earlier binding, and returns the
    /// matching constant entry.
    pub fn declare(&mut self, name: String, value: Value) -> Entry {
        if self.constants.insert(name.clone(), value.clone()).is_some() {
            debug!(name = %name, "constant redeclared");
        }

        Entry::Constant { name, value }
    }

    /// Resolves `name` and returns an evaluation entry holding a copy of its
    /// current value.
    ///
    /// # Errors
    /// Returns `ConfigError::UndefinedConstant` if `name` is not declared.
    pub fn evaluate(&self, name: String, line: usize) -> ConfigResult<Entry> {
        match self.constants.get(&name) {
            Some(value) => {
                let value = value.clone();
                Ok(Entry::Evaluation { name, value })
            },
            None => Err(ConfigError::UndefinedConstant { name, line }),
        }
    }

    /// Returns the current value of a constant, if declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    /// Returns the number of distinct constants declared.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Returns `true` if nothing has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
