use std::sync::Arc;

use crate::provider::identity_provider::IdentityProvider;
use crate::repository::whitelist_repository::WhitelistRepository;

pub mod dto;
pub(crate) mod mapper;
pub mod service;

/// Approved GitHub organizations of CLA groups.
///
/// Stateless: everything lives in the repository or at the identity provider.
#[derive(Clone)]
pub struct WhitelistService {
    whitelist_repository: Arc<dyn WhitelistRepository>,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl WhitelistService {
    pub fn new(
        whitelist_repository: Arc<dyn WhitelistRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            whitelist_repository,
            identity_provider,
        }
    }
}
