//! Error types for commit-core

use crate::key::InputKey;

/// Result type for commit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal resolution failures.
///
/// Advisory conditions (empty lists, missing identity fields, missing token)
/// are not errors; they are reported as [`crate::Diagnostic`] values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither `add` nor `remove` was provided
    #[error("Both 'add' and 'remove' are empty, the action has nothing to do.")]
    NothingToDo,

    /// An enumerated input holds an unrecognized value
    #[error("'{value}' is not a valid value for the '{key}' input. Valid values: {valid}")]
    InvalidEnumValue {
        key: InputKey,
        value: String,
        valid: String,
    },

    /// A boolean input holds something other than a YAML 1.2 core boolean
    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {key}\nSupport boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBooleanFormat { key: InputKey, value: String },

    /// The actor handle is needed for a default identity but is not available
    #[error("GITHUB_ACTOR is not set, cannot build a default identity for default_author '{default_author}'")]
    MissingActor { default_author: String },

    /// An input name that is not part of the declared key set
    #[error("Unknown input: {name}")]
    UnknownInput { name: String },

    /// A resolved field required by the downstream process is empty
    #[error("Resolved input '{key}' is empty")]
    EmptyResolvedField { key: InputKey },

    /// Publishing an output failed
    #[error("Failed to publish output '{key}': {source}")]
    Output {
        key: crate::key::OutputKey,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_enum(key: InputKey, value: impl Into<String>, valid: &[&str]) -> Self {
        Self::InvalidEnumValue {
            key,
            value: value.into(),
            valid: valid.join(", "),
        }
    }
}
