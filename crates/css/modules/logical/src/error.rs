use std::error::Error;
use std::fmt;

/// A key was looked up in a table that does not contain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedPropertyKey {
    key: String,
    table: &'static str,
}

impl UnrecognizedPropertyKey {
    pub(crate) fn new(key: &str, table: &'static str) -> Self {
        Self {
            key: key.to_owned(),
            table,
        }
    }

    /// The rejected key, verbatim.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Name of the table that was searched (`logicals`, `sides`, `text-align`, ...).
    pub const fn table(&self) -> &'static str {
        self.table
    }
}

impl fmt::Display for UnrecognizedPropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized key `{}` in table `{}`", self.key, self.table)
    }
}

impl Error for UnrecognizedPropertyKey {}
