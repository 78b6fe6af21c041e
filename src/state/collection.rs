//! The art collection currently displayed by the gallery.
//!
//! Producers replace the sequence wholesale; order is exactly that of the
//! last write. Nothing is validated or deduplicated, and every replacement
//! notifies, even one with equal content.

use std::sync::LazyLock;

use crate::{
    catalog::ArtPiece,
    state::store::{ChangePolicy, Writable},
};

/// Store holding the ordered art pieces of the current listing.
pub type ArtCollectionState = Writable<Vec<ArtPiece>>;

static ART_COLLECTION: LazyLock<ArtCollectionState> = LazyLock::new(new_art_collection);

fn new_art_collection() -> ArtCollectionState {
    Writable::with_policy("art_collection", Vec::new(), ChangePolicy::Always)
}

/// Process-wide art collection. Starts empty.
#[must_use]
pub fn art_collection() -> &'static ArtCollectionState {
    &ART_COLLECTION
}
