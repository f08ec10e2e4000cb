use thiserror::Error;

/// Fatal startup failure: a required setting is absent or unusable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for environment variable {name}")]
    Invalid { name: &'static str, value: String },
}

/// The payload does not have the structure the API documents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("not a mapping")]
    NotAMapping,
    #[error("missing homeworks key")]
    MissingHomeworks,
    #[error("homeworks not a sequence")]
    HomeworksNotASequence,
    #[error("empty list")]
    EmptyList,
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("{0} is not a string")]
    InvalidField(&'static str),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("undocumented status {0:?}")]
    UndocumentedStatus(String),
}

/// Failure while turning a homework record into a notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HomeworkError {
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}
