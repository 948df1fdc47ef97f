//! Rule-program loading.
//!
//! The rule program is a plain text resource read once per
//! orchestrator. A missing or unreadable file is reported as a value
//! and treated downstream exactly like an unavailable backend.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Default location of the lead rules, relative to the working
/// directory of the service.
pub const DEFAULT_RULES_PATH: &str = "rules/leads.metta";

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("failed to read rule program: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a rule program from disk.
pub fn load_rules(path: impl AsRef<Path>) -> Result<String, RulesError> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error_value() {
        let result = load_rules("definitely/not/here.metta");
        assert!(matches!(result, Err(RulesError::Io(_))));
    }
}
