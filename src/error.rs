//! Error types for blueprint access

use thiserror::Error;

/// Result type for blueprint operations
pub type Result<T> = std::result::Result<T, BlueprintError>;

/// Errors that can occur when loading blueprints or resolving labels
#[derive(Debug, Error)]
pub enum BlueprintError {
    /// No blueprint exists for the requested content type
    #[error("no blueprint for content type: {type_id}")]
    NotFound { type_id: String },

    /// A value was looked up in a field's options that the field does not declare
    #[error("field '{field}' has no option with value '{value}'")]
    UnknownOptionValue { field: String, value: String },

    /// An option declares a locale-keyed label that resolves to nothing
    #[error("no label could be resolved for option '{value}' of field '{field}'")]
    MissingLabel { field: String, value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = BlueprintError::NotFound {
            type_id: "article".into(),
        };
        assert_eq!(err.to_string(), "no blueprint for content type: article");
    }

    #[test]
    fn test_unknown_option_display() {
        let err = BlueprintError::UnknownOptionValue {
            field: "category".into(),
            value: "7".into(),
        };
        assert!(err.to_string().contains("category"));
        assert!(err.to_string().contains('7'));
    }
}
