use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Capabilities, TokenGeneration, TokenIssuer};
use crate::shared::AppError;

/// Absolute namespace prefix, e.g. `/foo/bar/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NamespacePath(String);

impl NamespacePath {
    pub fn new(path: impl Into<String>) -> Result<Self, AppError> {
        let path = path.into();
        if !path.starts_with('/') || path.chars().any(char::is_whitespace) {
            return Err(AppError::InvalidPath(path));
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NamespacePath {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NamespacePath> for String {
    fn from(path: NamespacePath) -> Self {
        path.0
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which servers currently serve a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceAssignment<'a> {
    Served {
        caches: &'a [String],
        origins: &'a [String],
    },
    /// Known to the director, but no server is assigned
    Orphaned,
}

/// A namespace as the director sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorNamespace {
    pub path: NamespacePath,
    pub capabilities: Capabilities,
    #[serde(deserialize_with = "super::nullable::deserialize")]
    pub token_generation: Option<Vec<TokenGeneration>>,
    #[serde(deserialize_with = "super::nullable::deserialize")]
    pub token_issuer: Option<Vec<TokenIssuer>>,
    pub from_topology: bool,
    pub caches: Vec<String>,
    pub origins: Vec<String>,
}

impl DirectorNamespace {
    pub fn assignment(&self) -> NamespaceAssignment<'_> {
        if self.is_orphaned() {
            NamespaceAssignment::Orphaned
        } else {
            NamespaceAssignment::Served {
                caches: &self.caches,
                origins: &self.origins,
            }
        }
    }

    pub fn is_orphaned(&self) -> bool {
        self.caches.is_empty() && self.origins.is_empty()
    }

    /// True when at least one issuer is configured for this namespace
    pub fn issues_tokens(&self) -> bool {
        self.token_issuer
            .as_ref()
            .is_some_and(|issuers| !issuers.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn public_namespace() -> serde_json::Value {
        json!({
            "path": "/public/data",
            "capabilities": {
                "PublicRead": true,
                "Read": false,
                "Write": false,
                "Listing": false,
                "FallBackRead": false
            },
            "tokenGeneration": null,
            "tokenIssuer": null,
            "fromTopology": false,
            "caches": ["https://cache-1.example.org:8443"],
            "origins": ["https://origin.example.org:8443"]
        })
    }

    #[test]
    fn test_public_read_only_namespace() {
        let ns: DirectorNamespace = serde_json::from_value(public_namespace()).unwrap();
        assert_eq!(ns.path.as_str(), "/public/data");
        assert!(ns.capabilities.allows_anonymous_read());
        assert!(!ns.capabilities.write);
        assert!(!ns.capabilities.listing);
        assert!(!ns.issues_tokens());
        assert_eq!(ns.token_generation, None);
        assert_eq!(ns.token_issuer, None);
    }

    #[test]
    fn test_null_and_empty_token_lists_stay_distinct() {
        let mut payload = public_namespace();
        payload["tokenIssuer"] = json!([]);
        let ns: DirectorNamespace = serde_json::from_value(payload).unwrap();
        assert_eq!(ns.token_generation, None);
        assert_eq!(ns.token_issuer, Some(vec![]));

        let encoded = serde_json::to_value(&ns).unwrap();
        assert_eq!(encoded["tokenGeneration"], serde_json::Value::Null);
        assert_eq!(encoded["tokenIssuer"], json!([]));
    }

    #[test]
    fn test_missing_token_generation_is_rejected() {
        let mut payload = public_namespace();
        payload.as_object_mut().unwrap().remove("tokenGeneration");
        assert!(serde_json::from_value::<DirectorNamespace>(payload).is_err());
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let mut payload = public_namespace();
        payload["path"] = json!("public/data");
        assert!(serde_json::from_value::<DirectorNamespace>(payload).is_err());

        assert!(NamespacePath::new("").is_err());
        assert!(NamespacePath::new("/with space").is_err());
        assert!(NamespacePath::new("/").is_ok());
    }

    #[test]
    fn test_orphaned_namespace() {
        let mut payload = public_namespace();
        payload["caches"] = json!([]);
        payload["origins"] = json!([]);
        let ns: DirectorNamespace = serde_json::from_value(payload).unwrap();
        assert!(ns.is_orphaned());
        assert_eq!(ns.assignment(), NamespaceAssignment::Orphaned);
    }

    #[test]
    fn test_served_namespace() {
        let ns: DirectorNamespace = serde_json::from_value(public_namespace()).unwrap();
        match ns.assignment() {
            NamespaceAssignment::Served { caches, origins } => {
                assert_eq!(caches.len(), 1);
                assert_eq!(origins, ["https://origin.example.org:8443".to_string()]);
            }
            NamespaceAssignment::Orphaned => panic!("namespace has servers"),
        }
    }
}
