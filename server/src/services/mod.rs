//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules (identity lookup, membership checks,
//! upload policy) so route handlers stay focused on header/body translation.
//! Storage access goes through `store::ChatStore`.

pub mod identity;
#[cfg(test)]
pub mod memory_store;
pub mod messages;
pub mod rooms;
pub mod store;
pub mod upload;
