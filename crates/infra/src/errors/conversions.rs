//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use opsboard_domain::OpsBoardError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub OpsBoardError);

impl From<InfraError> for OpsBoardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<OpsBoardError> for InfraError {
    fn from(value: OpsBoardError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoOpsBoardError {
    fn into_opsboard(self) -> OpsBoardError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → OpsBoardError */
/* -------------------------------------------------------------------------- */

impl IntoOpsBoardError for IoError {
    fn into_opsboard(self) -> OpsBoardError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => OpsBoardError::Source(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                OpsBoardError::Source(format!("permission denied: {self}"))
            }
            ErrorKind::InvalidData => {
                OpsBoardError::Serialization(format!("invalid file contents: {self}"))
            }
            _ => OpsBoardError::Source(format!("i/o failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_opsboard())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → OpsBoardError */
/* -------------------------------------------------------------------------- */

impl IntoOpsBoardError for JsonError {
    fn into_opsboard(self) -> OpsBoardError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => OpsBoardError::Source(format!("failed to read JSON: {self}")),
            Category::Syntax | Category::Eof => {
                OpsBoardError::Serialization(format!("malformed JSON: {self}"))
            }
            Category::Data => {
                OpsBoardError::Serialization(format!("unexpected JSON shape: {self}"))
            }
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_opsboard())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → OpsBoardError */
/* -------------------------------------------------------------------------- */

impl IntoOpsBoardError for TomlError {
    fn into_opsboard(self) -> OpsBoardError {
        OpsBoardError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_opsboard())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
