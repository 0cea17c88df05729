//! Validated request parameters for the NASA Image and Video Library API.

/// A validated search request against `GET /search`.
///
/// `query` is non-empty and trimmed; optional filters are present only when
/// the caller supplied a non-blank value. `page_size` is already clamped to
/// [1, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub query: String,
    pub media_type: Option<String>,
    pub center: Option<String>,
    pub year_start: Option<String>,
    pub year_end: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl SearchParams {
    /// Query-string pairs for the upstream request. Only non-empty optional
    /// filters are included.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("q".to_string(), self.query.clone()),
            ("page".to_string(), self.page.to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ];

        let optional = [
            ("media_type", &self.media_type),
            ("center", &self.center),
            ("year_start", &self.year_start),
            ("year_end", &self.year_end),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }

        pairs
    }
}

/// A validated album browse request against `GET /album/{name}`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumParams {
    pub album_name: String,
    pub page: u32,
}

impl AlbumParams {
    /// The upstream API treats page 1 as implicit, so the parameter is only
    /// sent for later pages.
    pub fn to_query(&self) -> Vec<(String, String)> {
        if self.page > 1 {
            vec![("page".to_string(), self.page.to_string())]
        } else {
            Vec::new()
        }
    }
}
