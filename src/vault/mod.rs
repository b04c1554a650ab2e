//! Vault module — durable storage for named TOTP secrets.
//!
//! This module provides:
//! - the on-disk `VaultRecord` data model (`record`)
//! - the high-level `VaultStore` for loading, mutating, and persisting
//!   a vault (`store`)

pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::VaultRecord;
pub use store::VaultStore;
