use crate::subject::SubjectKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("`{token}` is not a valid {kind} token")]
    MalformedToken { kind: SubjectKind, token: String },
    #[error("no {kind} with id {id}")]
    NotFound { kind: SubjectKind, id: String },
    #[error("template `{path}` is missing in locale `{locale}`")]
    TemplateMissing { locale: String, path: String },
}

impl RenderError {
    pub fn malformed(kind: SubjectKind, token: impl Into<String>) -> Self {
        Self::MalformedToken {
            kind,
            token: token.into(),
        }
    }

    pub fn not_found(kind: SubjectKind, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("cannot read the locale file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse the locale table")]
    Parse(#[from] serde_json::Error),
    #[error("the default locale `{0}` is not in the locale table")]
    DefaultMissing(String),
    #[error("the default locale `{locale}` has no template `{path}`")]
    DefaultIncomplete { locale: String, path: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("there is no locale called `{0}`")]
    UnknownLocale(String),
    #[error("cannot parse the guild locale entry `{0}`, expected `guild_id=locale`")]
    InvalidEntry(String),
}
