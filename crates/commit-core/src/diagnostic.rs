//! Advisory messages produced during resolution.

use serde::Serialize;

use crate::config::GitArg;
use crate::key::InputKey;

/// Severity of a diagnostic. None of them affect the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

/// Recoverable conditions worth telling apart from plain progress messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A list input parsed to zero elements
    EmptyList,
    /// The user lookup did not provide a name or email
    MissingIdentityField,
    /// No access token was configured
    MissingCredential,
    /// A legacy input value was found and dropped
    Deprecated,
    /// A combination of inputs that is allowed but likely to fail later
    RiskyCombination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DiagnosticKind>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            kind: None,
            message: message.into(),
        }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(Level::Debug, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new(Level::Warning, message)
        }
    }

    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new(Level::Error, message)
        }
    }

    /// Forward to the tracing subscriber at the matching level.
    pub fn emit(&self) {
        match self.level {
            Level::Debug => tracing::debug!("{}", self.message),
            Level::Info => tracing::info!("{}", self.message),
            Level::Warning => tracing::warn!("{}", self.message),
            Level::Error => tracing::error!("{}", self.message),
        }
    }
}

/// Everything a resolution run found out besides the store updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Interpretation chosen for `fetch`, when set
    pub fetch: Option<GitArg>,
    /// Interpretation chosen for `push`, when set
    pub push: Option<GitArg>,
    /// Branch the downstream process works on, when known
    pub target_ref: Option<String>,
}

impl ResolutionReport {
    /// Diagnostics of the given kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == Some(kind))
    }

    pub fn has(&self, kind: DiagnosticKind) -> bool {
        self.of_kind(kind).next().is_some()
    }

    /// Warnings and errors only.
    pub fn problems(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.level >= Level::Warning)
    }

    pub(crate) fn record_git_arg(&mut self, key: InputKey, arg: GitArg) {
        match key {
            InputKey::Fetch => self.fetch = Some(arg),
            InputKey::Push => self.push = Some(arg),
            _ => {}
        }
    }
}
