//! Pure formatters turning NASA API JSON into display text.
//!
//! The upstream schema is never validated; every lookup tolerates missing
//! keys and falls back to a placeholder.

use serde_json::Value;

/// Description text is cut to this many characters in listings.
const DESCRIPTION_LIMIT: usize = 200;

/// At most this many keywords are listed per item.
const KEYWORD_LIMIT: usize = 5;

fn str_field<'a>(record: &'a Value, key: &str, default: &'a str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or(default)
}

/// Format a single media item from a search or album collection.
///
/// Only the first element of the item's `data` list is meaningful (API
/// convention). The preview link is the first `links` entry with
/// `rel == "preview"`, empty when absent.
pub fn format_media_item(item: &Value) -> String {
    let data = item
        .get("data")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .cloned()
        .unwrap_or(Value::Null);

    let preview_link = item
        .get("links")
        .and_then(Value::as_array)
        .and_then(|links| {
            links
                .iter()
                .find(|link| link.get("rel").and_then(Value::as_str) == Some("preview"))
        })
        .and_then(|link| link.get("href"))
        .and_then(Value::as_str)
        .unwrap_or("");

    let description: String = str_field(&data, "description", "No description available")
        .chars()
        .take(DESCRIPTION_LIMIT)
        .collect();

    let mut result = format!(
        "📸 **{title}**\n\
         🆔 NASA ID: {nasa_id}\n\
         📅 Date: {date}\n\
         🏢 Center: {center}\n\
         📝 Media Type: {media_type}\n\
         📖 Description: {description}...\n\
         🔍 Preview: {preview_link}\n",
        title = str_field(&data, "title", "Untitled"),
        nasa_id = str_field(&data, "nasa_id", "N/A"),
        date = str_field(&data, "date_created", "Unknown"),
        center = str_field(&data, "center", "Unknown"),
        media_type = str_field(&data, "media_type", "Unknown"),
    );

    let keywords: Vec<&str> = data
        .get("keywords")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if !keywords.is_empty() {
        let shown: Vec<&str> = keywords.iter().take(KEYWORD_LIMIT).copied().collect();
        result.push_str(&format!("🏷️ Keywords: {}", shown.join(", ")));
        if keywords.len() > KEYWORD_LIMIT {
            result.push_str(&format!(" (+{} more)", keywords.len() - KEYWORD_LIMIT));
        }
    }

    result
}

/// Format an asset manifest as one line per downloadable file.
///
/// Each href is classified by substring in priority order; the first match
/// wins and classification is independent across entries.
pub fn format_asset_manifest(items: &[Value]) -> String {
    let mut result = String::from("📁 **Available Asset Files:**\n\n");

    for item in items {
        let href = item.get("href").and_then(Value::as_str).unwrap_or("");
        let (emoji, label) = if href.contains("~orig") {
            ("🖼️", "Original")
        } else if href.contains("~medium") {
            ("📷", "Medium")
        } else if href.contains("~small") {
            ("🔸", "Small")
        } else if href.contains("~thumb") {
            ("👁️", "Thumbnail")
        } else if href.contains("metadata.json") {
            ("📋", "Metadata")
        } else {
            ("📄", "File")
        };
        result.push_str(&format!("{emoji} {label}: {href}\n"));
    }

    result
}

/// Whether the collection's pagination links advertise a next page.
pub fn has_next_page(collection: &Value) -> bool {
    collection
        .get("links")
        .and_then(Value::as_array)
        .map(|links| {
            links
                .iter()
                .any(|link| link.get("rel").and_then(Value::as_str) == Some("next"))
        })
        .unwrap_or(false)
}
