//! Structured logging module for the federation dashboard
//!
//! Provides consistent, contextual logging across navigation composition
//! and directory decoding. Every record carries an `operation` field.

/// Log operations for the different parts of the dashboard core
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Composition,
    TitleResolution,
    ConfigLoad,
    DirectoryDecode,
    Projection,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Composition => "composition",
            LogOperation::TitleResolution => "title_resolution",
            LogOperation::ConfigLoad => "config_load",
            LogOperation::DirectoryDecode => "directory_decode",
            LogOperation::Projection => "projection",
        }
    }
}

/// Install the fmt subscriber, honouring `RUST_LOG` on top of INFO.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Log the outcome of one composition pass
pub fn log_composition_result(role: &str, export_type: &str, visible: usize, hidden: usize) {
    tracing::debug!(
        operation = LogOperation::Composition.as_str(),
        role = role,
        export_type = export_type,
        visible_count = visible,
        hidden_count = hidden,
        "Navigation composed"
    );
}

/// Log a failing deferred title producer before the error propagates
pub fn log_title_producer_error(error: &str) {
    tracing::error!(
        operation = LogOperation::TitleResolution.as_str(),
        error = error,
        "Deferred title producer failed"
    );
}

/// Log sibling entries sharing a resolved title (rendering key collision)
pub fn log_duplicate_titles(duplicates: &[String]) {
    tracing::warn!(
        operation = LogOperation::Composition.as_str(),
        duplicates = ?duplicates,
        "Visible navigation entries share a title"
    );
}

/// Log a navigation config load
pub fn log_config_loaded(source: &str, item_count: usize) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        source = source,
        item_count = item_count,
        "Navigation config loaded"
    );
}

/// Log a rejected directory payload
pub fn log_decode_rejected(record: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::DirectoryDecode.as_str(),
        record = record,
        error = error,
        "Rejected directory payload"
    );
}

/// Log a decoded directory payload
pub fn log_decode_success(record: &str, count: usize) {
    tracing::trace!(
        operation = LogOperation::DirectoryDecode.as_str(),
        record = record,
        count = count,
        "Directory payload decoded"
    );
}

/// Log a general/detailed divergence for one server
pub fn log_projection_mismatch(server: &str, server_type: &str, general: usize, detailed: usize) {
    tracing::warn!(
        operation = LogOperation::Projection.as_str(),
        server = server,
        server_type = server_type,
        general_prefixes = general,
        detailed_namespaces = detailed,
        "Server views diverge"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Composition.as_str(), "composition");
        assert_eq!(LogOperation::TitleResolution.as_str(), "title_resolution");
        assert_eq!(LogOperation::ConfigLoad.as_str(), "config_load");
        assert_eq!(LogOperation::DirectoryDecode.as_str(), "directory_decode");
        assert_eq!(LogOperation::Projection.as_str(), "projection");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        log_composition_result("admin", "origin", 2, 1);
    }
}
