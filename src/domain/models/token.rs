use serde::{Deserialize, Serialize};

/// How a server mints tokens for writes under a namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGeneration {
    pub strategy: String,
    pub vault_server: String,
    /// Bound on path-scope nesting
    pub max_scope_depth: u32,
    pub issuer: String,
}

/// An issuer trusted for a namespace, and which paths its tokens may cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIssuer {
    pub base_paths: Vec<String>,
    /// `None` is "no restriction"; `Some(vec![])` restricts everything.
    #[serde(deserialize_with = "super::nullable::deserialize")]
    pub restricted_paths: Option<Vec<String>>,
    pub issuer: String,
}

impl TokenIssuer {
    /// Whether a token from this issuer may be scoped to `path`.
    pub fn permits(&self, path: &str) -> bool {
        self.base_paths
            .iter()
            .filter(|base| is_path_prefix(base, path))
            .any(|base| match &self.restricted_paths {
                None => true,
                Some(restricted) => restricted
                    .iter()
                    .any(|sub| is_path_prefix(&join_path(base, sub), path)),
            })
    }
}

/// `prefix` matches `path` on whole path components only
fn is_path_prefix(prefix: &str, path: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return path.starts_with('/');
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn join_path(base: &str, sub: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        sub.trim_start_matches('/')
    )
}
