//! [`IdentityProvider`] backed by the GitHub REST API.

use std::sync::Arc;

use url::Url;

use self::dto::GithubOrganizationResponseDTO;
use super::IdentityProvider;
use super::error::IdentityProviderError;
use super::model::{ExternalOrganization, OrganizationPage};
use crate::provider::http_client::HttpClient;

mod dto;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

pub struct GithubIdentityProvider {
    http_client: Arc<dyn HttpClient>,
    base_url: Url,
    user_agent: String,
}

impl GithubIdentityProvider {
    pub fn new(http_client: Arc<dyn HttpClient>, mut base_url: Url, user_agent: String) -> Self {
        // keep the API prefix of enterprise hosts (`/api/v3`) when joining paths
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http_client,
            base_url,
            user_agent,
        }
    }

    fn user_organizations_url(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Url, IdentityProviderError> {
        let mut url = self.base_url.join("user/orgs")?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());

        Ok(url)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for GithubIdentityProvider {
    async fn list_organizations_for_user(
        &self,
        access_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<OrganizationPage, IdentityProviderError> {
        if access_token.is_empty() {
            return Err(IdentityProviderError::MissingAccessToken);
        }

        let url = self.user_organizations_url(page, per_page)?;

        let response = self
            .http_client
            .get(url.as_str())
            .bearer_auth(access_token)
            .header("Accept", GITHUB_MEDIA_TYPE)
            .header("User-Agent", &self.user_agent)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .send()
            .await?
            .error_for_status()?;

        let has_more = response.link().is_some_and(|link| has_next_page(&link));

        let organizations = response
            .json::<Vec<GithubOrganizationResponseDTO>>()?
            .into_iter()
            .map(|organization| {
                organization
                    .login
                    .filter(|login| !login.is_empty())
                    .map(|login| ExternalOrganization { login })
                    .ok_or(IdentityProviderError::MissingLogin { page })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrganizationPage {
            organizations,
            has_more,
        })
    }
}

/// Checks an RFC 8288 `Link` header for a `rel="next"` relation.
fn has_next_page(link: &str) -> bool {
    link.split(',').any(|relation| {
        relation
            .split(';')
            .skip(1)
            .any(|param| matches!(param.trim(), r#"rel="next""# | "rel=next"))
    })
}
