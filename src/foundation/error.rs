/// Convenience result type used across the engine.
pub type AlluvialResult<T> = Result<T, AlluvialError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum AlluvialError {
    /// A group or stratum has no rows, so a relative size would divide by zero.
    #[error("empty group: {}", describe_empty(.group, .stratum))]
    EmptyGroup {
        /// Label of the group that is empty (or contains the empty stratum).
        group: String,
        /// Label of the empty stratum, if the group itself has rows.
        stratum: Option<String>,
    },

    /// Fewer than two groups were supplied; flows need at least one adjacent pair.
    #[error("invalid group count: flows need at least 2 groups, got {0}")]
    InvalidGroupCount(usize),

    /// A referenced column is not present in the table.
    #[error("missing column \"{0}\"")]
    MissingColumn(String),

    /// Invalid user-provided configuration or table data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AlluvialError {
    /// Build an [`AlluvialError::EmptyGroup`] for a group with no rows.
    pub fn empty_group(group: impl Into<String>) -> Self {
        Self::EmptyGroup {
            group: group.into(),
            stratum: None,
        }
    }

    /// Build an [`AlluvialError::EmptyGroup`] for an empty stratum inside `group`.
    pub fn empty_stratum(group: impl Into<String>, stratum: impl Into<String>) -> Self {
        Self::EmptyGroup {
            group: group.into(),
            stratum: Some(stratum.into()),
        }
    }

    /// Build an [`AlluvialError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AlluvialError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

fn describe_empty(group: &str, stratum: &Option<String>) -> String {
    match stratum {
        Some(s) => format!("stratum \"{s}\" in group \"{group}\" has no rows"),
        None => format!("group \"{group}\" has no rows"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
