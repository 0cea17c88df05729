use crate::error::Error;
use crate::format::{format_asset_manifest, format_media_item, has_next_page};
use crate::mcp::tools::{BrowseAlbumRequest, NasaIdRequest, SearchMediaRequest};
use crate::nasa::client::NasaApi;
use crate::nasa::types::{AlbumParams, SearchParams};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, InitializeResult, ProtocolVersion, ServerCapabilities,
};
use rmcp::{ErrorData as McpError, ServerHandler, ServiceExt, tool, tool_handler, tool_router};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Albums shown at most this many items per page regardless of size.
const ALBUM_PREVIEW_LIMIT: usize = 5;

#[derive(Clone)]
pub struct NasaMediaServer {
    client: Arc<dyn NasaApi>,
    tool_router: ToolRouter<Self>,
}

fn collection_items(body: &Value) -> Vec<Value> {
    body.pointer("/collection/items")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn total_hits(body: &Value) -> u64 {
    body.pointer("/collection/metadata/total_hits")
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

fn collection_has_next(body: &Value) -> bool {
    body.get("collection").is_some_and(has_next_page)
}

/// Convert any failure into the user-facing error string for one tool.
///
/// A 404 becomes the tool's own "not found" message when one is given;
/// upstream and transport failures are logged before conversion so the
/// diagnostics survive outside the returned text.
fn render_error(err: &Error, context: &str, not_found: Option<String>) -> String {
    match err {
        Error::InvalidInput(msg) => format!("❌ Error: {msg}"),
        Error::ApiStatus { status, body } => {
            warn!(status, body = body.as_str(), "NASA API request failed");
            match (*status, not_found) {
                (404, Some(message)) => message,
                _ => format!("❌ NASA API Error: {status} - {body}"),
            }
        }
        other => {
            error!(error = %other, context, "tool call failed");
            format!("❌ Error {context}: {other}")
        }
    }
}

impl NasaMediaServer {
    pub fn new(client: Arc<dyn NasaApi>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn run_stdio(self) -> anyhow::Result<()> {
        use tokio::io::{stdin, stdout};

        // Create stdio transport
        let transport = (stdin(), stdout());

        // Start MCP server with stdio transport
        let server = self.serve(transport).await?;

        // Wait for shutdown signal (blocks until server terminates)
        server.waiting().await?;

        Ok(())
    }

    // ========================================================================
    // Tool bodies: validate, fetch, format. Always return display text;
    // every failure is rendered, never propagated to the MCP layer.
    // ========================================================================

    async fn search_media(&self, request: SearchMediaRequest) -> String {
        const CONTEXT: &str = "searching NASA media";

        let params = match request.into_params() {
            Ok(params) => params,
            Err(err) => return render_error(&err, CONTEXT, None),
        };
        info!(query = params.query.as_str(), page = params.page, "searching NASA media");

        match self.fetch_search(&params).await {
            Ok(text) => text,
            Err(err) => render_error(&err, CONTEXT, None),
        }
    }

    async fn fetch_search(&self, params: &SearchParams) -> Result<String, Error> {
        let body = self.client.get_json("/search", &params.to_query()).await?;

        let items = collection_items(&body);
        if items.is_empty() {
            return Ok(format!("🔍 No results found for query: '{}'", params.query));
        }

        let mut result = String::from("🚀 **NASA Media Search Results**\n\n");
        result.push_str(&format!(
            "📊 Found {} total results (showing page {})\n\n",
            total_hits(&body),
            params.page
        ));

        for (i, item) in items.iter().enumerate() {
            result.push_str(&format!(
                "**Result {}:**\n{}\n\n",
                i + 1,
                format_media_item(item)
            ));
        }

        if collection_has_next(&body) {
            result.push_str(&format!(
                "➡️ More results available - use page {} to see next page",
                params.page + 1
            ));
        }

        Ok(result)
    }

    async fn get_asset(&self, request: NasaIdRequest) -> String {
        const CONTEXT: &str = "retrieving NASA asset";

        let nasa_id = match request.into_nasa_id() {
            Ok(id) => id,
            Err(err) => return render_error(&err, CONTEXT, None),
        };
        info!(nasa_id = nasa_id.as_str(), "getting NASA asset");

        match self.fetch_asset(&nasa_id).await {
            Ok(text) => text,
            Err(err) => render_error(
                &err,
                CONTEXT,
                Some(format!("❌ NASA ID not found: {nasa_id}")),
            ),
        }
    }

    async fn fetch_asset(&self, nasa_id: &str) -> Result<String, Error> {
        let body = self
            .client
            .get_json(&format!("/asset/{nasa_id}"), &[])
            .await?;

        let items = collection_items(&body);
        if items.is_empty() {
            return Ok(format!("❌ No asset files found for NASA ID: {nasa_id}"));
        }

        Ok(format!(
            "🚀 **NASA Asset: {nasa_id}**\n\n{}",
            format_asset_manifest(&items)
        ))
    }

    async fn get_metadata(&self, request: NasaIdRequest) -> String {
        const CONTEXT: &str = "retrieving NASA metadata";

        let nasa_id = match request.into_nasa_id() {
            Ok(id) => id,
            Err(err) => return render_error(&err, CONTEXT, None),
        };
        info!(nasa_id = nasa_id.as_str(), "getting NASA metadata");

        match self.fetch_metadata(&nasa_id).await {
            Ok(text) => text,
            Err(err) => render_error(
                &err,
                CONTEXT,
                Some(format!("❌ NASA ID not found: {nasa_id}")),
            ),
        }
    }

    async fn fetch_metadata(&self, nasa_id: &str) -> Result<String, Error> {
        let body = self
            .client
            .get_json(&format!("/metadata/{nasa_id}"), &[])
            .await?;

        let location = body.get("location").and_then(Value::as_str).unwrap_or("");
        if location.is_empty() {
            return Ok(format!(
                "❌ No metadata location found for NASA ID: {nasa_id}"
            ));
        }

        Ok(format!(
            "📋 **Metadata for NASA Asset: {nasa_id}**\n\n\
             📄 Metadata JSON Location: {location}\n\n\
             💡 Download this JSON file to access detailed metadata about the asset \
             including EXIF data, technical specifications, and extended descriptions."
        ))
    }

    async fn get_captions(&self, request: NasaIdRequest) -> String {
        const CONTEXT: &str = "retrieving NASA captions";

        let nasa_id = match request.into_nasa_id() {
            Ok(id) => id,
            Err(err) => return render_error(&err, CONTEXT, None),
        };
        info!(nasa_id = nasa_id.as_str(), "getting NASA captions");

        match self.fetch_captions(&nasa_id).await {
            Ok(text) => text,
            Err(err) => render_error(
                &err,
                CONTEXT,
                Some(format!(
                    "❌ NASA ID not found or no captions available: {nasa_id}"
                )),
            ),
        }
    }

    async fn fetch_captions(&self, nasa_id: &str) -> Result<String, Error> {
        let body = self
            .client
            .get_json(&format!("/captions/{nasa_id}"), &[])
            .await?;

        let location = body.get("location").and_then(Value::as_str).unwrap_or("");
        if location.is_empty() {
            return Ok(format!(
                "❌ No captions found for NASA ID: {nasa_id} \
                 (may not be a video or captions may not be available)"
            ));
        }

        Ok(format!(
            "🎬 **Video Captions for NASA Asset: {nasa_id}**\n\n\
             📝 Caption File Location: {location}\n\n\
             💡 Download this VTT or SRT file to access video captions/subtitles."
        ))
    }

    async fn browse_album(&self, request: BrowseAlbumRequest) -> String {
        const CONTEXT: &str = "browsing NASA album";

        let params = match request.into_params() {
            Ok(params) => params,
            Err(err) => return render_error(&err, CONTEXT, None),
        };
        info!(album = params.album_name.as_str(), page = params.page, "browsing NASA album");

        let not_found = format!(
            "❌ Album not found: '{}'. Try albums like 'apollo', 'hubble', 'mars', or 'iss'",
            params.album_name
        );
        match self.fetch_album(&params).await {
            Ok(text) => text,
            Err(err) => render_error(&err, CONTEXT, Some(not_found)),
        }
    }

    async fn fetch_album(&self, params: &AlbumParams) -> Result<String, Error> {
        let body = self
            .client
            .get_json(
                &format!("/album/{}", params.album_name),
                &params.to_query(),
            )
            .await?;

        let items = collection_items(&body);
        if items.is_empty() {
            return Ok(format!(
                "❌ Album not found or empty: '{}'. \
                 Try albums like 'apollo', 'hubble', 'mars', or 'iss'",
                params.album_name
            ));
        }

        let mut result = format!("📚 **NASA Album: {}**\n\n", params.album_name);
        result.push_str(&format!(
            "📊 Total items in album: {} (showing page {})\n\n",
            total_hits(&body),
            params.page
        ));

        for (i, item) in items.iter().take(ALBUM_PREVIEW_LIMIT).enumerate() {
            result.push_str(&format!(
                "**Item {}:**\n{}\n\n",
                i + 1,
                format_media_item(item)
            ));
        }

        if items.len() > ALBUM_PREVIEW_LIMIT {
            result.push_str(&format!(
                "... and {} more items on this page\n\n",
                items.len() - ALBUM_PREVIEW_LIMIT
            ));
        }

        if collection_has_next(&body) {
            result.push_str(&format!(
                "➡️ More items available - use page {} to see next page",
                params.page + 1
            ));
        }

        Ok(result)
    }
}

// ============================================================================
// MCP tool surface
// ============================================================================

#[tool_router]
impl NasaMediaServer {
    #[tool(
        description = "Search NASA's image and video library for media assets based on your query."
    )]
    async fn search_nasa_media(
        &self,
        Parameters(request): Parameters<SearchMediaRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.search_media(request).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Get available files and formats for a specific NASA media asset by its NASA ID."
    )]
    async fn get_nasa_asset(
        &self,
        Parameters(request): Parameters<NasaIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.get_asset(request).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get the metadata file location for a specific NASA media asset.")]
    async fn get_nasa_metadata(
        &self,
        Parameters(request): Parameters<NasaIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.get_metadata(request).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get caption file location for a NASA video asset (VTT/SRT subtitles).")]
    async fn get_nasa_captions(
        &self,
        Parameters(request): Parameters<NasaIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.get_captions(request).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Browse contents of a NASA media album by name (e.g., 'apollo', 'hubble', 'mars')."
    )]
    async fn browse_nasa_album(
        &self,
        Parameters(request): Parameters<BrowseAlbumRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.browse_album(request).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for NasaMediaServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nasa-media-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NASA Image and Video Library connector - search NASA media, \
                 inspect asset files, and browse curated albums"
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nasa::client::MockNasaApi;
    use serde_json::json;

    fn server_with(mock: MockNasaApi) -> NasaMediaServer {
        NasaMediaServer::new(Arc::new(mock))
    }

    fn search_request(query: &str) -> SearchMediaRequest {
        SearchMediaRequest {
            query: Some(query.to_string()),
            ..Default::default()
        }
    }

    fn item(title: &str) -> Value {
        json!({
            "data": [{"title": title, "nasa_id": "id-1"}],
            "links": [{"rel": "preview", "href": "https://example.com/thumb.jpg"}]
        })
    }

    #[test]
    fn server_handler_provides_server_info() {
        let server = server_with(MockNasaApi::new());

        let result = server.get_info();

        assert_eq!(result.protocol_version, ProtocolVersion::default());
        assert_eq!(result.server_info.name, "nasa-media-mcp");
        assert_eq!(result.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(result.instructions.is_some());
    }

    // ========================================================================
    // search_nasa_media
    // ========================================================================

    #[tokio::test]
    async fn search_blank_query_returns_validation_error_without_http_call() {
        // Mock has no expectations: any client call would panic the test
        let server = server_with(MockNasaApi::new());

        let text = server.search_media(SearchMediaRequest::default()).await;

        assert_eq!(text, "❌ Error: Search query is required");
    }

    #[tokio::test]
    async fn search_invalid_page_returns_validation_error_without_http_call() {
        let server = server_with(MockNasaApi::new());

        let mut request = search_request("mars");
        request.page = Some("three".to_string());
        let text = server.search_media(request).await;

        assert!(text.starts_with("❌ Error: Invalid page or page_size parameter"));
    }

    #[tokio::test]
    async fn search_empty_items_reports_no_results_with_one_call() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .withf(|path, _| path == "/search")
            .times(1)
            .returning(|_, _| Ok(json!({"collection": {"items": [], "metadata": {"total_hits": 0}}})));

        let text = server_with(mock).search_media(search_request("nothingness")).await;

        assert_eq!(text, "🔍 No results found for query: 'nothingness'");
    }

    #[tokio::test]
    async fn search_renders_numbered_results_with_total_and_next_hint() {
        let body = json!({"collection": {
            "items": [item("First"), item("Second")],
            "metadata": {"total_hits": 2340},
            "links": [{"rel": "next", "href": "n"}]
        }});
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .times(1)
            .returning(move |_, _| Ok(body.clone()));

        let text = server_with(mock).search_media(search_request("apollo")).await;

        assert!(text.starts_with("🚀 **NASA Media Search Results**"));
        assert!(text.contains("📊 Found 2340 total results (showing page 1)"));
        assert!(text.contains("**Result 1:**\n📸 **First**"));
        assert!(text.contains("**Result 2:**\n📸 **Second**"));
        assert!(text.contains("➡️ More results available - use page 2 to see next page"));
    }

    #[tokio::test]
    async fn search_without_next_link_omits_pagination_hint() {
        let body = json!({"collection": {
            "items": [item("Only")],
            "metadata": {"total_hits": 1}
        }});
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .returning(move |_, _| Ok(body.clone()));

        let text = server_with(mock).search_media(search_request("apollo")).await;

        assert!(!text.contains("➡️"));
    }

    #[tokio::test]
    async fn search_sends_only_non_blank_filters() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .withf(|path, query| {
                path == "/search"
                    && query.contains(&("q".to_string(), "apollo".to_string()))
                    && query.contains(&("media_type".to_string(), "image".to_string()))
                    && !query.iter().any(|(k, _)| k == "center")
            })
            .times(1)
            .returning(|_, _| Ok(json!({"collection": {"items": []}})));

        let mut request = search_request("apollo");
        request.media_type = Some("image".to_string());
        request.center = Some("   ".to_string());
        server_with(mock).search_media(request).await;
    }

    #[tokio::test]
    async fn search_upstream_error_renders_api_error_string() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json().returning(|_, _| {
            Err(Error::ApiStatus {
                status: 500,
                body: "oops".to_string(),
            })
        });

        let text = server_with(mock).search_media(search_request("apollo")).await;

        assert_eq!(text, "❌ NASA API Error: 500 - oops");
    }

    #[tokio::test]
    async fn search_network_error_renders_context_string() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .returning(|_, _| Err(Error::Network("connection timeout".to_string())));

        let text = server_with(mock).search_media(search_request("apollo")).await;

        assert_eq!(
            text,
            "❌ Error searching NASA media: network error: connection timeout"
        );
    }

    // ========================================================================
    // get_nasa_asset
    // ========================================================================

    #[tokio::test]
    async fn asset_blank_id_returns_validation_error_without_http_call() {
        let server = server_with(MockNasaApi::new());

        let text = server.get_asset(NasaIdRequest::default()).await;

        assert_eq!(text, "❌ Error: NASA ID is required");
    }

    #[tokio::test]
    async fn asset_renders_manifest_lines() {
        let body = json!({"collection": {"items": [
            {"href": "x~orig.jpg"},
            {"href": "x~thumb.jpg"}
        ]}});
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .withf(|path, query| path == "/asset/as11-40-5874" && query.is_empty())
            .times(1)
            .returning(move |_, _| Ok(body.clone()));

        let request = NasaIdRequest {
            nasa_id: Some("as11-40-5874".to_string()),
        };
        let text = server_with(mock).get_asset(request).await;

        assert!(text.starts_with("🚀 **NASA Asset: as11-40-5874**"));
        assert!(text.contains("📁 **Available Asset Files:**"));
        assert!(text.contains("🖼️ Original: x~orig.jpg"));
        assert!(text.contains("👁️ Thumbnail: x~thumb.jpg"));
    }

    #[tokio::test]
    async fn asset_empty_items_reports_no_files() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .returning(|_, _| Ok(json!({"collection": {"items": []}})));

        let request = NasaIdRequest {
            nasa_id: Some("ghost-id".to_string()),
        };
        let text = server_with(mock).get_asset(request).await;

        assert_eq!(text, "❌ No asset files found for NASA ID: ghost-id");
    }

    #[tokio::test]
    async fn asset_404_maps_to_nasa_id_not_found() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json().returning(|_, _| {
            Err(Error::ApiStatus {
                status: 404,
                body: "not found".to_string(),
            })
        });

        let request = NasaIdRequest {
            nasa_id: Some("ghost-id".to_string()),
        };
        let text = server_with(mock).get_asset(request).await;

        assert_eq!(text, "❌ NASA ID not found: ghost-id");
    }

    #[tokio::test]
    async fn asset_non_404_status_keeps_generic_api_error() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json().returning(|_, _| {
            Err(Error::ApiStatus {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let request = NasaIdRequest {
            nasa_id: Some("ghost-id".to_string()),
        };
        let text = server_with(mock).get_asset(request).await;

        assert_eq!(text, "❌ NASA API Error: 500 - boom");
    }

    // ========================================================================
    // get_nasa_metadata / get_nasa_captions
    // ========================================================================

    #[tokio::test]
    async fn metadata_renders_location_and_hint() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .withf(|path, _| path == "/metadata/id-1")
            .returning(|_, _| Ok(json!({"location": "https://example.com/metadata.json"})));

        let request = NasaIdRequest {
            nasa_id: Some("id-1".to_string()),
        };
        let text = server_with(mock).get_metadata(request).await;

        assert!(text.starts_with("📋 **Metadata for NASA Asset: id-1**"));
        assert!(text.contains("📄 Metadata JSON Location: https://example.com/metadata.json"));
        assert!(text.contains("💡 Download this JSON file"));
    }

    #[tokio::test]
    async fn metadata_empty_location_reports_missing() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .returning(|_, _| Ok(json!({"location": ""})));

        let request = NasaIdRequest {
            nasa_id: Some("id-1".to_string()),
        };
        let text = server_with(mock).get_metadata(request).await;

        assert_eq!(text, "❌ No metadata location found for NASA ID: id-1");
    }

    #[tokio::test]
    async fn captions_renders_location_and_hint() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .withf(|path, _| path == "/captions/vid-1")
            .returning(|_, _| Ok(json!({"location": "https://example.com/captions.vtt"})));

        let request = NasaIdRequest {
            nasa_id: Some("vid-1".to_string()),
        };
        let text = server_with(mock).get_captions(request).await;

        assert!(text.starts_with("🎬 **Video Captions for NASA Asset: vid-1**"));
        assert!(text.contains("📝 Caption File Location: https://example.com/captions.vtt"));
        assert!(text.contains("💡 Download this VTT or SRT file"));
    }

    #[tokio::test]
    async fn captions_missing_location_notes_asset_may_not_be_video() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json().returning(|_, _| Ok(json!({})));

        let request = NasaIdRequest {
            nasa_id: Some("img-1".to_string()),
        };
        let text = server_with(mock).get_captions(request).await;

        assert_eq!(
            text,
            "❌ No captions found for NASA ID: img-1 \
             (may not be a video or captions may not be available)"
        );
    }

    #[tokio::test]
    async fn captions_404_uses_captions_specific_not_found() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json().returning(|_, _| {
            Err(Error::ApiStatus {
                status: 404,
                body: String::new(),
            })
        });

        let request = NasaIdRequest {
            nasa_id: Some("img-1".to_string()),
        };
        let text = server_with(mock).get_captions(request).await;

        assert_eq!(text, "❌ NASA ID not found or no captions available: img-1");
    }

    // ========================================================================
    // browse_nasa_album
    // ========================================================================

    fn album_request(name: &str, page: Option<&str>) -> BrowseAlbumRequest {
        BrowseAlbumRequest {
            album_name: Some(name.to_string()),
            page: page.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn album_blank_name_returns_validation_error_without_http_call() {
        let server = server_with(MockNasaApi::new());

        let text = server.browse_album(BrowseAlbumRequest::default()).await;

        assert_eq!(
            text,
            "❌ Error: Album name is required (examples: 'apollo', 'hubble', 'mars', 'iss')"
        );
    }

    #[tokio::test]
    async fn album_page_one_omits_page_query_param() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .withf(|path, query| path == "/album/apollo" && query.is_empty())
            .times(1)
            .returning(|_, _| Ok(json!({"collection": {"items": [{"data": [{}]}]}})));

        server_with(mock)
            .browse_album(album_request("apollo", Some("1")))
            .await;
    }

    #[tokio::test]
    async fn album_later_page_includes_page_query_param() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .withf(|path, query| {
                path == "/album/apollo" && query == [("page".to_string(), "3".to_string())]
            })
            .times(1)
            .returning(|_, _| Ok(json!({"collection": {"items": [{"data": [{}]}]}})));

        server_with(mock)
            .browse_album(album_request("apollo", Some("3")))
            .await;
    }

    #[tokio::test]
    async fn album_shows_first_five_items_and_counts_the_rest() {
        let items: Vec<Value> = (1..=7).map(|i| item(&format!("Item{i}"))).collect();
        let body = json!({"collection": {"items": items, "metadata": {"total_hits": 120}}});
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .returning(move |_, _| Ok(body.clone()));

        let text = server_with(mock)
            .browse_album(album_request("hubble", None))
            .await;

        assert!(text.starts_with("📚 **NASA Album: hubble**"));
        assert!(text.contains("📊 Total items in album: 120 (showing page 1)"));
        assert!(text.contains("**Item 5:**"));
        assert!(!text.contains("**Item 6:**"));
        assert!(text.contains("... and 2 more items on this page"));
    }

    #[tokio::test]
    async fn album_empty_items_suggests_known_albums() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .returning(|_, _| Ok(json!({"collection": {"items": []}})));

        let text = server_with(mock)
            .browse_album(album_request("unknown", None))
            .await;

        assert_eq!(
            text,
            "❌ Album not found or empty: 'unknown'. \
             Try albums like 'apollo', 'hubble', 'mars', or 'iss'"
        );
    }

    #[tokio::test]
    async fn album_404_maps_to_album_not_found() {
        let mut mock = MockNasaApi::new();
        mock.expect_get_json().returning(|_, _| {
            Err(Error::ApiStatus {
                status: 404,
                body: String::new(),
            })
        });

        let text = server_with(mock)
            .browse_album(album_request("unknown", None))
            .await;

        assert_eq!(
            text,
            "❌ Album not found: 'unknown'. Try albums like 'apollo', 'hubble', 'mars', or 'iss'"
        );
    }

    #[tokio::test]
    async fn album_next_link_adds_pagination_hint_with_next_page_number() {
        let body = json!({"collection": {
            "items": [item("One")],
            "metadata": {"total_hits": 60},
            "links": [{"rel": "next", "href": "n"}]
        }});
        let mut mock = MockNasaApi::new();
        mock.expect_get_json()
            .returning(move |_, _| Ok(body.clone()));

        let text = server_with(mock)
            .browse_album(album_request("mars", Some("2")))
            .await;

        assert!(text.contains("➡️ More items available - use page 3 to see next page"));
    }
}
