//! Static navigation configuration
//!
//! Loaded from JSON, or taken from the stock operator layout. Entries read
//! from JSON always carry literal titles; deferred titles and custom
//! predicates are only available when building the config in code.

use serde::Deserialize;
use std::path::Path;

use super::types::{ExportType, NavigationItemConfig, Role, Title, Visibility};
use crate::shared::{logging, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationConfig {
    pub items: Vec<NavigationItemConfig>,
}

/// JSON shape of a navigation entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawNavigationItem {
    title: Title,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    allowed_roles: Option<Vec<Role>>,
    #[serde(default)]
    allowed_export_types: Option<Vec<ExportType>>,
    #[serde(default)]
    children: Vec<RawNavigationItem>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNavigationConfig {
    items: Vec<RawNavigationItem>,
}

impl From<RawNavigationItem> for NavigationItemConfig {
    fn from(raw: RawNavigationItem) -> Self {
        let visibility = match (raw.allowed_roles, raw.allowed_export_types) {
            (None, None) => Visibility::Always,
            (roles, export_types) => Visibility::AllowList {
                roles,
                export_types,
            },
        };
        NavigationItemConfig {
            title: raw.title,
            href: raw.href,
            icon: raw.icon,
            visibility,
            children: raw.children.into_iter().map(Into::into).collect(),
        }
    }
}

impl NavigationConfig {
    pub fn new(items: Vec<NavigationItemConfig>) -> Self {
        Self { items }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawNavigationConfig = serde_json::from_str(json)?;
        Ok(Self::new(raw.items.into_iter().map(Into::into).collect()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        logging::log_config_loaded(&path.display().to_string(), config.items.len());
        Ok(config)
    }

    /// Stock navigation of the operator dashboard
    pub fn operator_default() -> Self {
        let admin_only = || Visibility::for_roles(["admin"]);

        Self::new(vec![
            NavigationItemConfig::new("Dashboard").href("/").icon("dashboard"),
            NavigationItemConfig::new("Origin")
                .href("/origin/")
                .icon("storage")
                .visibility(admin_only()),
            NavigationItemConfig::new("Globus Collections")
                .href("/origin/globus/")
                .icon("public")
                .visibility(Visibility::AllowList {
                    roles: Some(vec![Role::new("admin")]),
                    export_types: Some(vec![ExportType::new("globus")]),
                }),
            NavigationItemConfig::new("Cache")
                .href("/cache/")
                .icon("cached")
                .visibility(admin_only()),
            NavigationItemConfig::new("Director")
                .href("/director/")
                .icon("hub")
                .child(NavigationItemConfig::new("Servers").href("/director/servers/"))
                .child(NavigationItemConfig::new("Namespaces").href("/director/namespaces/")),
            NavigationItemConfig::new("Registry").href("/registry/").icon("list"),
            NavigationItemConfig::new(Title::deferred(|| {
                if cfg!(debug_assertions) {
                    "Config (dev build)".to_string()
                } else {
                    "Config".to_string()
                }
            }))
            .href("/config/")
            .icon("settings")
            .visibility(admin_only()),
        ])
    }
}
