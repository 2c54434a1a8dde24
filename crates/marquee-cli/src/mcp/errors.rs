//! Error handling utilities for the MCP server

use marquee_core::DirectoryError;
use rmcp::ErrorData;

/// Convert a directory error into an MCP error, prefixing `message`.
///
/// Unknown IDs become `resource_not_found` and rejected input becomes
/// `invalid_params`; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &DirectoryError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        DirectoryError::NotFound { .. } => ErrorData::resource_not_found(text, None),
        DirectoryError::InvalidInput { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
