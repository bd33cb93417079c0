use serde::Deserialize;

/// Entry of `GET /user/orgs`. Only the login is used.
#[derive(Clone, Debug, Deserialize)]
pub(super) struct GithubOrganizationResponseDTO {
    #[serde(default)]
    pub login: Option<String>,
}
