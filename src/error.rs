use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartnerFitError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("company not found: {0}")]
    CompanyNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PartnerFitError>;
