//! Decoding of catalog payloads captured on disk.
//!
//! The gallery never fetches; a collaborator (or the console driver) hands it
//! API responses that were saved as JSON files.

use std::{fs::read_to_string, path::Path};

use {serde_json::from_str, tracing::debug};

use crate::{
    catalog::models::{ArtPieceDetail, CollectionResponse, DetailResponse},
    error::CatalogError,
};

/// Parses a collection search response.
///
/// # Errors
///
/// Returns `CatalogError::DecodeError` if `json` is not a collection response.
pub fn parse_collection(json: &str) -> Result<CollectionResponse, CatalogError> {
    Ok(from_str(json)?)
}

/// Parses a detail response and unwraps its `artObject`.
///
/// # Errors
///
/// Returns `CatalogError::DecodeError` if `json` is not a detail response.
pub fn parse_detail(json: &str) -> Result<ArtPieceDetail, CatalogError> {
    let response: DetailResponse = from_str(json)?;
    Ok(response.art_object)
}

/// Reads and parses a collection response saved at `path`.
///
/// # Errors
///
/// Returns `CatalogError::ReadError` if the file cannot be read, or
/// `CatalogError::DecodeError` if its content is not a collection response.
pub fn load_collection(path: &Path) -> Result<CollectionResponse, CatalogError> {
    let contents = read_to_string(path).map_err(|source| CatalogError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let response = parse_collection(&contents)?;
    debug!(
        path = %path.display(),
        pieces = response.art_objects.len(),
        count = response.count,
        "Loaded collection payload"
    );

    Ok(response)
}
