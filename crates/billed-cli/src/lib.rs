use std::path::Path;

use billed_app::{Navigator, Route};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Declared content type for a receipt path, derived from the extension.
/// Only the accepted image extensions map to a type; anything else is
/// reported as unknown so the validator can reject it upstream.
pub fn content_type_for_path(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg".to_string(),
        Some("png") => "image/png".to_string(),
        Some(other) => format!("application/x-{}", other),
        None => "application/octet-stream".to_string(),
    }
}

/// Navigator for the CLI: there are no views to render, so a navigation is
/// just logged with the target route.
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(path = route.path(), title = route.title(), "Navigating");
    }
}
