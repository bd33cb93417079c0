use std::sync::Arc;

use whitelist_repository::WhitelistRepository;

pub mod error;
pub mod whitelist_repository;

/// Entry point for storage implementations.
pub trait DataRepository: Send + Sync {
    fn get_whitelist_repository(&self) -> Arc<dyn WhitelistRepository>;
}
