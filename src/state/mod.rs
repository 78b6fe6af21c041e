//! Reactive gallery state.
//!
//! Two process-wide stores, the displayed art collection and the current
//! page, built on a generic `Writable` cell.

pub mod collection;
pub mod page;
pub mod store;

pub use {
    collection::{ArtCollectionState, art_collection},
    page::{PageState, next_page, page, previous_page, reset_page},
    store::{ChangePolicy, Readable, Subscription, Writable},
};

/// Serializes tests that write to the process-wide stores.
#[cfg(test)]
pub(crate) static SINGLETON_GUARD: parking_lot::Mutex<()> = parking_lot::Mutex::new(());
