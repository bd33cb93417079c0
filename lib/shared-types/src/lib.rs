mod cla_group_id;
mod github_organization_id;
mod macros;

pub use cla_group_id::ClaGroupId;
pub use github_organization_id::GithubOrganizationId;

#[cfg(test)]
mod test;
