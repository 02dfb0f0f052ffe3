//! Error handling for registry configuration.
//!
//! Every registration failure surfaces as a [`ConfigError`], raised on the
//! first violation encountered. A failing call never partially mutates the
//! registry.

use thiserror::Error;

use crate::control::ControlType;

/// Errors raised while declaring node and port types.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A node type with this key was already declared.
    #[error("A node with type \"{0}\" has already been declared")]
    DuplicateNodeType(String),

    /// A port type with this key was already declared.
    #[error("A port with type \"{0}\" has already been declared")]
    DuplicatePortType(String),

    /// A ports closure asked for a port type that was never declared.
    #[error("No port with type \"{0}\" has been declared")]
    UnknownPortType(String),

    /// A control validator rejected its configuration.
    #[error("Invalid {control_type} control configuration: {message}")]
    InvalidControl {
        control_type: ControlType,
        message: String,
    },
}

/// Result type alias for registry configuration.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::DuplicateNodeType("add".to_string());
        assert_eq!(
            err.to_string(),
            "A node with type \"add\" has already been declared"
        );

        let err = ConfigError::InvalidControl {
            control_type: ControlType::Select,
            message: "options must not be empty".to_string(),
        };
        assert!(err.to_string().contains("select"));
        assert!(err.to_string().contains("options must not be empty"));
    }
}
