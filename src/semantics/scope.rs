use std::{collections::HashSet, error::Error, fmt::Display};

/// Names introduced so far in one run.
#[derive(Clone, Default)]
pub struct Scope {
    names: HashSet<String>,
}

impl Scope {
    /// Introduces `name`, refusing to shadow an existing one.
    pub fn put(&mut self, name: &str) -> Result<(), ScopeError> {
        if !self.names.insert(name.to_string()) {
            return Err(ScopeError::new(name));
        }

        Ok(())
    }

    /// Introduces `name` whether or not it is already known.
    pub fn set(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[derive(Debug)]
pub struct ScopeError {
    id: String
}

impl ScopeError {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Error for ScopeError {}

impl Display for ScopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{}\" is already defined", self.id)
    }
}

#[cfg(test)]
mod scope_tests {
    use super::*;

    #[test]
    fn test_put_rejects_duplicates() {
        let mut scope = Scope::default();

        assert!(scope.put("A").is_ok());

        let err = scope.put("A").unwrap_err();
        assert_eq!(err.id(), "A");
        assert_eq!(err.to_string(), "\"A\" is already defined");
        assert!(scope.contains("A"));
    }

    #[test]
    fn test_set_allows_repeats() {
        let mut scope = Scope::default();

        scope.set("AB");
        scope.set("AB");

        assert!(scope.contains("AB"));
        assert!(!scope.contains("BA"));
        assert!(scope.put("AB").is_err());
    }
}
