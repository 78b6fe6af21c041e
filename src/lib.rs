//! Artgallery - reactive state for an art-catalog gallery
//!
//! Holds the art pieces currently listed and the current page in two
//! process-wide stores that UI components subscribe to, together with the
//! record shapes of the catalog API those pieces come from.

pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod state;

// Re-export key types for convenience
pub use {
    catalog::{ArtPiece, ArtPieceDetail, Dating, WebImage},
    config::{GallerySettings, SettingsError, SettingsManager},
    console::{Command, Console, Outcome},
    error::{CatalogError, CommandError, ErrorReporter, ResultExt},
    state::{
        ArtCollectionState, ChangePolicy, PageState, Readable, Subscription, Writable,
        art_collection, page,
    },
};
