use thiserror::Error;

use crate::provider::http_client;

#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("Missing access token")]
    MissingAccessToken,

    #[error("HTTP client error: {0}")]
    Http(#[from] http_client::Error),

    #[error("Organization without login on page {page}")]
    MissingLogin { page: u32 },

    #[error("Invalid identity provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
