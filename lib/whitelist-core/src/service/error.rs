use shared_types::GithubOrganizationId;
use strum::Display;
use thiserror::Error;

use crate::provider::identity_provider::error::IdentityProviderError;
use crate::repository::error::DataLayerError;
use crate::util::context::Interrupted;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error("Identity provider error: `{0}`")]
    IdentityProvider(#[from] IdentityProviderError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Operation deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Unable to add GitHub organization, not logged in")]
    MissingAccessToken,

    #[error("User does not control GitHub organization `{organization_id}`")]
    OrganizationNotControlled {
        organization_id: GithubOrganizationId,
    },
}

/// Failure classes callers map onto their own status codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Unauthenticated,
    Unauthorized,
    UpstreamUnavailable,
    StorageFailure,
    Cancelled,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum ErrorCode {
    Whitelist001,
    Whitelist002,
    Whitelist003,
    Whitelist004,
    Whitelist005,
    Whitelist006,
    Whitelist007,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Whitelist001 => "Missing access token",
            ErrorCode::Whitelist002 => "GitHub organization not controlled by user",
            ErrorCode::Whitelist003 => "Identity provider unavailable",
            ErrorCode::Whitelist004 => "Identity provider returned invalid data",
            ErrorCode::Whitelist005 => "Database error",
            ErrorCode::Whitelist006 => "Operation cancelled",
            ErrorCode::Whitelist007 => "Operation deadline exceeded",
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::Whitelist001 => ErrorKind::Unauthenticated,
            ErrorCode::Whitelist002 => ErrorKind::Unauthorized,
            ErrorCode::Whitelist003 | ErrorCode::Whitelist004 => ErrorKind::UpstreamUnavailable,
            ErrorCode::Whitelist005 => ErrorKind::StorageFailure,
            ErrorCode::Whitelist006 | ErrorCode::Whitelist007 => ErrorKind::Cancelled,
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::IdentityProvider(error) => error.error_code(),
            ServiceError::Repository(_) => ErrorCode::Whitelist005,
            ServiceError::Cancelled => ErrorCode::Whitelist006,
            ServiceError::DeadlineExceeded => ErrorCode::Whitelist007,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error_code().kind()
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::MissingAccessToken => ErrorCode::Whitelist001,
            BusinessLogicError::OrganizationNotControlled { .. } => ErrorCode::Whitelist002,
        }
    }
}

impl IdentityProviderError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            IdentityProviderError::MissingLogin { .. } => ErrorCode::Whitelist004,
            IdentityProviderError::MissingAccessToken
            | IdentityProviderError::Http(_)
            | IdentityProviderError::InvalidUrl(_) => ErrorCode::Whitelist003,
        }
    }
}

impl From<Interrupted> for ServiceError {
    fn from(value: Interrupted) -> Self {
        match value {
            Interrupted::Cancelled => ServiceError::Cancelled,
            Interrupted::DeadlineExceeded => ServiceError::DeadlineExceeded,
        }
    }
}
