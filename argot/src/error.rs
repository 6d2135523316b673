#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid option name: {0:?}")]
    InvalidName(String),

    #[error("option already registered: {0}")]
    DuplicateOption(String),

    #[error("option not found: {0}")]
    NotFound(String),

    #[error("ambiguous option --{name}: could be {}", .candidates.join(", "))]
    AmbiguousName {
        name: String,
        candidates: Vec<String>,
    },

    #[error("bad option format: {0}")]
    BadFormat(String),

    #[error("option -{0} requires a value")]
    MissingValue(char),

    #[error("invalid boolean value: {value:?}")]
    ValueConversion { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
