//! Contracts for the persistent document store.
//!
//! Each trait covers one collection. Implementations assign timestamps at
//! write time; callers never supply them.

pub mod broadcast_store;
pub mod notification_record_store;
pub mod preference_store;
pub mod recipient_directory;
pub mod settings_store;
pub mod token_store;
