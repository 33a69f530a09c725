use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A propositional variable, identified by its name.
///
/// Clones share the name allocation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(Arc<str>);

impl Var {
    /// Creates a variable, provided `name` is a valid identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    pub fn new(name: &str) -> Result<Self> {
        let mut chars = name.chars();
        let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
        if !head_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::invalid_input(format!(
                "`{}` is not a valid variable name",
                name
            )));
        }

        Ok(Var(Arc::from(name)))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Var {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Var::new(name)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
