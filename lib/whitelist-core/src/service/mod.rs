pub mod error;
pub mod whitelist;
