use shared_types::GithubOrganizationId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GithubOrganizationDTO {
    pub id: GithubOrganizationId,
}
