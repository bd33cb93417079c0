use shared_types::{ClaGroupId, GithubOrganizationId};

/// GitHub organization approved for a CLA group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistEntry {
    pub cla_group_id: ClaGroupId,
    pub organization_id: GithubOrganizationId,
}
