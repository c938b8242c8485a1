use std::fmt;

/// Errors from parsing identifiers and policies, or from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A string didn't match any known disposition.
    #[error("invalid {kind} disposition '{value}'")]
    InvalidDisposition {
        kind: DispositionKind,
        value: Box<str>,
    },
    /// A table path didn't have the shape of a (possibly project qualified) table.
    #[error(
        "invalid table path '{0}', expected 'project:dataset.table', \
        'project.dataset.table' or 'dataset.table'"
    )]
    InvalidTablePath(Box<str>),
    /// None of the project id environment variables were set.
    #[error("no project id configured, checked {}", crate::PROJECT_ID_ENV_VARS.join(", "))]
    MissingProjectId,
}

/// Which disposition failed to parse, for [`Error::InvalidDisposition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispositionKind {
    Create,
    Write,
}

impl fmt::Display for DispositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Write => f.write_str("write"),
        }
    }
}
