use shared_types::{ClaGroupId, GithubOrganizationId};

use super::error::DataLayerError;
use crate::model::whitelist::WhitelistEntry;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait WhitelistRepository: Send + Sync {
    /// Removes the entry; removing an absent entry is not an error.
    async fn delete_entry(
        &self,
        cla_group_id: &ClaGroupId,
        organization_id: &GithubOrganizationId,
    ) -> Result<(), DataLayerError>;

    async fn add_entry(
        &self,
        cla_group_id: &ClaGroupId,
        organization_id: &GithubOrganizationId,
    ) -> Result<(), DataLayerError>;

    async fn list_entries(
        &self,
        cla_group_id: &ClaGroupId,
    ) -> Result<Vec<WhitelistEntry>, DataLayerError>;
}
