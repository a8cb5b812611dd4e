//! Album records

use serde::{Deserialize, Serialize};

/// A single album row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Caller-supplied identifier, unique at the storage layer
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// A partial update to an album
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumChanges {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
}
