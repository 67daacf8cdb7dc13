use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelegateError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("stakeholder '{0}' has an empty alias list")]
    EmptyAlias(String),

    #[error("invalid field '{0}': expected Key=Value")]
    InvalidField(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DelegateError>;
