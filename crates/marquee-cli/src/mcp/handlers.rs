//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use marquee_core::{display::CreateResult, params as core, Directory};
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types carry an optional schemars derive but no MCP-specific
// behavior. Wrapping them in a transparent serde container lets rmcp
// deserialize tool arguments and publish their schemas without the core
// knowing about the protocol.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type Search = McpParams<core::Search>;
pub type ListShows = McpParams<core::ListShows>;
pub type CreateShow = McpParams<core::CreateShow>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        markdown.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    directory: Arc<Mutex<Directory>>,
}

impl McpHandlers {
    pub fn new(directory: Arc<Mutex<Directory>>) -> Self {
        Self { directory }
    }

    pub async fn list_venues(&self) -> McpResult {
        debug!("list_venues");

        let groups = self
            .directory
            .lock()
            .await
            .list_venues_grouped()
            .await
            .map_err(|e| to_mcp_error("Failed to list venues", &e))?;

        text(groups)
    }

    pub async fn search(&self, Parameters(params): Parameters<Search>) -> McpResult {
        debug!("search: {:?}", params);

        let inner = params.as_ref();
        let results = self
            .directory
            .lock()
            .await
            .search(inner)
            .await
            .map_err(|e| to_mcp_error(&format!("Failed to search {}s", inner.kind), &e))?;

        text(results)
    }

    pub async fn show_venue(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_venue: {:?}", params);

        let detail = self
            .directory
            .lock()
            .await
            .venue_detail(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get venue", &e))?;

        text(detail)
    }

    pub async fn list_artists(&self) -> McpResult {
        debug!("list_artists");

        let index = self
            .directory
            .lock()
            .await
            .list_artists()
            .await
            .map_err(|e| to_mcp_error("Failed to list artists", &e))?;

        text(index)
    }

    pub async fn show_artist(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_artist: {:?}", params);

        let detail = self
            .directory
            .lock()
            .await
            .artist_detail(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get artist", &e))?;

        text(detail)
    }

    pub async fn list_shows(&self, Parameters(params): Parameters<ListShows>) -> McpResult {
        debug!("list_shows: {:?}", params);

        let roster = self
            .directory
            .lock()
            .await
            .list_shows(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list shows", &e))?;

        text(roster)
    }

    pub async fn create_show(&self, Parameters(params): Parameters<CreateShow>) -> McpResult {
        debug!("create_show: {:?}", params);

        let show = self
            .directory
            .lock()
            .await
            .create_show(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create show", &e))?;

        text(CreateResult::new(show))
    }
}

#[cfg(test)]
mod tests {
    use marquee_core::{clock::FixedClock, params::VenueFields, DirectoryBuilder, RecordKind};
    use rmcp::model::RawContent;
    use tempfile::TempDir;

    use super::*;

    async fn handlers() -> (McpHandlers, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let directory = DirectoryBuilder::new()
            .with_database_path(Some(dir.path().join("mcp.db")))
            .with_clock(FixedClock::new(
                "2030-01-01T00:00:00Z".parse().expect("timestamp"),
            ))
            .build()
            .await
            .expect("directory");
        (McpHandlers::new(Arc::new(Mutex::new(directory))), dir)
    }

    fn body(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_returns_markdown_hits() {
        let (handlers, _dir) = handlers().await;
        handlers
            .directory
            .lock()
            .await
            .create_venue(&VenueFields {
                name: "The Musical Hop".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let params = McpParams(core::Search {
            term: "hop".to_string(),
            kind: RecordKind::Venue,
        });
        let result = handlers.search(Parameters(params)).await.unwrap();
        assert!(body(&result).contains("The Musical Hop"));
    }

    #[tokio::test]
    async fn test_missing_venue_is_resource_not_found() {
        let (handlers, _dir) = handlers().await;

        let err = handlers
            .show_venue(Parameters(McpParams(core::Id { id: 42 })))
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_show_rejects_bad_time() {
        let (handlers, _dir) = handlers().await;

        let err = handlers
            .create_show(Parameters(McpParams(core::CreateShow {
                artist_id: 1,
                venue_id: 1,
                start_time: "tomorrow night".to_string(),
            })))
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
