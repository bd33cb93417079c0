use std::collections::HashSet;

use one_dto_mapper::convert_inner;
use shared_types::{ClaGroupId, GithubOrganizationId};

use super::WhitelistService;
use super::dto::GithubOrganizationDTO;
use crate::provider::identity_provider::fetch_all_organizations;
use crate::provider::identity_provider::model::ExternalOrganization;
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, ServiceError};
use crate::util::context::RequestContext;

impl WhitelistService {
    /// Removes a GitHub organization from the whitelist of a CLA group
    ///
    /// # Arguments
    ///
    /// * `cla_group_id` - CLA group owning the whitelist
    /// * `organization_id` - GitHub organization login
    #[tracing::instrument(level = "debug", skip(self, ctx), err(Debug))]
    pub async fn remove_organization(
        &self,
        ctx: &RequestContext,
        cla_group_id: &ClaGroupId,
        organization_id: &GithubOrganizationId,
    ) -> Result<(), ServiceError> {
        ctx.run(
            self.whitelist_repository
                .delete_entry(cla_group_id, organization_id),
        )
        .await??;

        tracing::info!("Removed organization `{organization_id}` from whitelist of `{cla_group_id}`");
        Ok(())
    }

    /// Adds a GitHub organization to the whitelist of a CLA group
    ///
    /// The owner of `access_token` must be a member of the organization; membership is
    /// checked against every page the identity provider returns.
    ///
    /// # Arguments
    ///
    /// * `cla_group_id` - CLA group owning the whitelist
    /// * `organization_id` - GitHub organization login, matched case-sensitively
    /// * `access_token` - GitHub access token of the caller
    #[tracing::instrument(level = "debug", skip(self, ctx, access_token), err(Debug))]
    pub async fn add_organization(
        &self,
        ctx: &RequestContext,
        cla_group_id: &ClaGroupId,
        organization_id: &GithubOrganizationId,
        access_token: &str,
    ) -> Result<(), ServiceError> {
        if access_token.is_empty() {
            return Err(BusinessLogicError::MissingAccessToken.into());
        }

        let organizations = self.fetch_user_organizations(ctx, access_token).await?;

        if !organizations
            .iter()
            .any(|organization| organization.login == organization_id.as_str())
        {
            tracing::warn!(
                "User is not a member of organization `{organization_id}`, searched {} organizations",
                organizations.len()
            );
            return Err(BusinessLogicError::OrganizationNotControlled {
                organization_id: organization_id.to_owned(),
            }
            .into());
        }

        // no write once the caller gave up
        ctx.check()?;

        match ctx
            .run(
                self.whitelist_repository
                    .add_entry(cla_group_id, organization_id),
            )
            .await?
        {
            Ok(()) => {}
            Err(DataLayerError::AlreadyExists) => {
                tracing::debug!("Organization `{organization_id}` already whitelisted");
            }
            Err(error) => return Err(error.into()),
        }

        tracing::info!("Added organization `{organization_id}` to whitelist of `{cla_group_id}`");
        Ok(())
    }

    /// Returns the whitelisted organizations of a CLA group
    ///
    /// With a non-empty `access_token` the result is extended by the organizations of the
    /// token owner that are not whitelisted yet. Whitelisted entries come first in storage
    /// order, followed by the remaining organizations in identity provider order.
    ///
    /// # Arguments
    ///
    /// * `cla_group_id` - CLA group owning the whitelist
    /// * `access_token` - optional GitHub access token of the caller
    #[tracing::instrument(level = "debug", skip(self, ctx, access_token), err(Debug))]
    pub async fn list_organizations(
        &self,
        ctx: &RequestContext,
        cla_group_id: &ClaGroupId,
        access_token: Option<&str>,
    ) -> Result<Vec<GithubOrganizationDTO>, ServiceError> {
        let entries = ctx
            .run(self.whitelist_repository.list_entries(cla_group_id))
            .await??;

        let mut organizations: Vec<GithubOrganizationDTO> = convert_inner(entries);

        let Some(access_token) = access_token.filter(|token| !token.is_empty()) else {
            return Ok(organizations);
        };

        let whitelisted: HashSet<GithubOrganizationId> = organizations
            .iter()
            .map(|organization| organization.id.to_owned())
            .collect();

        let candidates = self
            .fetch_user_organizations(ctx, access_token)
            .await?
            .into_iter()
            .filter(|organization| !whitelisted.contains(organization.login.as_str()));

        organizations.extend(candidates.map(GithubOrganizationDTO::from));

        Ok(organizations)
    }

    async fn fetch_user_organizations(
        &self,
        ctx: &RequestContext,
        access_token: &str,
    ) -> Result<Vec<ExternalOrganization>, ServiceError> {
        let organizations = ctx
            .run(fetch_all_organizations(
                self.identity_provider.as_ref(),
                access_token,
            ))
            .await??;

        Ok(organizations)
    }
}
