//! Art-catalog record shapes and payload decoding.

pub mod models;
pub mod snapshot;

pub use {
    models::{ArtPiece, ArtPieceDetail, CollectionResponse, Dating, DetailResponse, WebImage},
    snapshot::{load_collection, parse_collection, parse_detail},
};
