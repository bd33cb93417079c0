//! Whitelist of GitHub organizations approved for CLA groups.

use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::http_client::HttpClient;
use provider::http_client::reqwest_client::ReqwestClient;
use provider::identity_provider::github::GithubIdentityProvider;
use repository::DataRepository;
use service::whitelist::WhitelistService;
use thiserror::Error;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;
pub mod util;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct WhitelistCore {
    pub whitelist_service: WhitelistService,
}

impl WhitelistCore {
    /// Wires the services. Without an injected `http_client` a reqwest client honoring
    /// `github.requestTimeout` is created.
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
        http_client: Option<Arc<dyn HttpClient>>,
    ) -> Result<Self, CoreError> {
        let http_client: Arc<dyn HttpClient> = match http_client {
            Some(http_client) => http_client,
            None => {
                let client = reqwest::Client::builder()
                    .timeout(config.github.request_timeout)
                    .build()?;
                Arc::new(ReqwestClient::new(client))
            }
        };

        let identity_provider = Arc::new(GithubIdentityProvider::new(
            http_client,
            config.github.api_base_url,
            config.github.user_agent,
        ));

        Ok(Self {
            whitelist_service: WhitelistService::new(
                data_provider.get_whitelist_repository(),
                identity_provider,
            ),
        })
    }
}
