//! MCP tool request types and the validation boundary.
//!
//! The host transport encodes every tool argument as text, so all fields
//! arrive as strings. Numeric-looking parameters are parsed here and never
//! travel further as raw text.

use crate::error::Error;
use crate::nasa::types::{AlbumParams, SearchParams};
use rmcp::schemars;
use serde::Deserialize;

/// Request for the search_nasa_media tool.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct SearchMediaRequest {
    #[schemars(description = "Search query (required)")]
    pub query: Option<String>,

    #[schemars(description = "Filter by media type: image, video, or audio")]
    pub media_type: Option<String>,

    #[schemars(description = "Filter by NASA center, e.g. JPL or KSC")]
    pub center: Option<String>,

    #[schemars(description = "Earliest year to include (4-digit year)")]
    pub year_start: Option<String>,

    #[schemars(description = "Latest year to include (4-digit year)")]
    pub year_end: Option<String>,

    #[schemars(description = "Result page number (default: 1)")]
    pub page: Option<String>,

    #[schemars(description = "Results per page, 1-100 (default: 10)")]
    pub page_size: Option<String>,
}

/// Request for the asset, metadata, and captions tools, which all address
/// a single media asset by its NASA ID.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct NasaIdRequest {
    #[schemars(description = "NASA ID of the media asset (required)")]
    pub nasa_id: Option<String>,
}

/// Request for the browse_nasa_album tool.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct BrowseAlbumRequest {
    #[schemars(description = "Album name, e.g. 'apollo', 'hubble', 'mars' (required)")]
    pub album_name: Option<String>,

    #[schemars(description = "Page number within the album (default: 1)")]
    pub page: Option<String>,
}

/// Trim a parameter and drop it entirely when blank.
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Require a non-blank parameter, with a tool-specific message.
fn required(value: Option<String>, message: &str) -> Result<String, Error> {
    trimmed(value).ok_or_else(|| Error::InvalidInput(message.to_string()))
}

/// Parse an optional count parameter, blank meaning `default`. Signed, so
/// that out-of-range negatives reach the clamp instead of failing to parse.
fn parse_count(raw: Option<&str>, default: i64) -> Result<i64, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(text) => text
            .parse::<i64>()
            .map_err(|e| format!("'{text}': {e}")),
    }
}

/// Clamp page_size to [1, 100]. Values below 1 fall back to the default of
/// 10 rather than the lower bound; this asymmetry is observable upstream
/// behavior and kept deliberately.
pub(crate) fn clamp_page_size(value: i64) -> u32 {
    if value > 100 {
        100
    } else if value < 1 {
        10
    } else {
        value as u32
    }
}

fn page_from(value: i64) -> u32 {
    value.clamp(1, i64::from(u32::MAX)) as u32
}

impl SearchMediaRequest {
    pub fn into_params(self) -> Result<SearchParams, Error> {
        let query = required(self.query, "Search query is required")?;

        let invalid =
            |e: String| Error::InvalidInput(format!("Invalid page or page_size parameter: {e}"));
        let page = parse_count(self.page.as_deref(), 1).map_err(invalid)?;
        let page_size = parse_count(self.page_size.as_deref(), 10).map_err(invalid)?;

        Ok(SearchParams {
            query,
            media_type: trimmed(self.media_type),
            center: trimmed(self.center),
            year_start: trimmed(self.year_start),
            year_end: trimmed(self.year_end),
            page: page_from(page),
            page_size: clamp_page_size(page_size),
        })
    }
}

impl NasaIdRequest {
    pub fn into_nasa_id(self) -> Result<String, Error> {
        required(self.nasa_id, "NASA ID is required")
    }
}

impl BrowseAlbumRequest {
    pub fn into_params(self) -> Result<AlbumParams, Error> {
        let album_name = required(
            self.album_name,
            "Album name is required (examples: 'apollo', 'hubble', 'mars', 'iss')",
        )?;

        let page = parse_count(self.page.as_deref(), 1)
            .map_err(|e| Error::InvalidInput(format!("Invalid page parameter: {e}")))?;

        Ok(AlbumParams {
            album_name,
            page: page_from(page),
        })
    }
}
