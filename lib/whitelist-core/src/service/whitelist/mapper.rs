use super::dto::GithubOrganizationDTO;
use crate::model::whitelist::WhitelistEntry;
use crate::provider::identity_provider::model::ExternalOrganization;

impl From<WhitelistEntry> for GithubOrganizationDTO {
    fn from(value: WhitelistEntry) -> Self {
        Self {
            id: value.organization_id,
        }
    }
}

impl From<ExternalOrganization> for GithubOrganizationDTO {
    fn from(value: ExternalOrganization) -> Self {
        Self {
            id: value.login.into(),
        }
    }
}
