//! Lookup of the organizations an access token's owner belongs to.

use futures::{Stream, TryStreamExt, stream};

use self::error::IdentityProviderError;
use self::model::{ExternalOrganization, OrganizationPage};

pub mod error;
pub mod github;
pub mod model;

pub const ORGANIZATIONS_PAGE_SIZE: u32 = 100;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns one page of the organizations of the user owning `access_token`.
    ///
    /// Pages are 1-based. `has_more` is `false` once the provider knows there is nothing left.
    async fn list_organizations_for_user(
        &self,
        access_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<OrganizationPage, IdentityProviderError>;
}

/// Lazily walks all organization pages, starting at page 1 on every call.
///
/// The sequence ends after a short page or a page reporting `has_more == false`.
/// The first error is yielded and terminates the sequence.
pub fn organization_pages<'a>(
    provider: &'a dyn IdentityProvider,
    access_token: &'a str,
) -> impl Stream<Item = Result<Vec<ExternalOrganization>, IdentityProviderError>> + Send + 'a {
    stream::try_unfold(Some(1u32), move |next_page| async move {
        let Some(page) = next_page else {
            return Ok(None);
        };

        let OrganizationPage {
            organizations,
            has_more,
        } = provider
            .list_organizations_for_user(access_token, page, ORGANIZATIONS_PAGE_SIZE)
            .await?;

        let is_last = !has_more || organizations.len() < ORGANIZATIONS_PAGE_SIZE as usize;
        tracing::trace!(page, count = organizations.len(), is_last, "Fetched organization page");

        Ok(Some((organizations, (!is_last).then_some(page + 1))))
    })
}

/// Collects every page into one list, in provider order.
pub async fn fetch_all_organizations(
    provider: &dyn IdentityProvider,
    access_token: &str,
) -> Result<Vec<ExternalOrganization>, IdentityProviderError> {
    organization_pages(provider, access_token).try_concat().await
}
