//! Navigation configuration and composed entries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::shared::{logging, AppError, Result};

/// Zero-argument title producer, invoked on every composition pass
pub type TitleProducer = Arc<dyn Fn() -> anyhow::Result<String> + Send + Sync>;

/// Visibility predicate over the viewer's role and the deployment export type
pub type VisibilityPredicate = Arc<dyn Fn(&Role, &ExportType) -> bool + Send + Sync>;

/// Display title of a navigation entry, either fixed or computed at render time
#[derive(Clone)]
pub enum Title {
    Literal(String),
    Deferred(TitleProducer),
}

impl Title {
    pub fn literal(title: impl Into<String>) -> Self {
        Title::Literal(title.into())
    }

    pub fn deferred<F>(producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Title::Deferred(Arc::new(move || Ok(producer())))
    }

    pub fn try_deferred<F>(producer: F) -> Self
    where
        F: Fn() -> anyhow::Result<String> + Send + Sync + 'static,
    {
        Title::Deferred(Arc::new(producer))
    }

    /// Resolve to the string to display. Producer failures are returned, not
    /// replaced by a fallback.
    pub fn resolve(&self) -> Result<String> {
        match self {
            Title::Literal(title) => Ok(title.clone()),
            Title::Deferred(producer) => producer().map_err(|e| {
                logging::log_title_producer_error(&format!("{e:#}"));
                AppError::TitleProducer(e)
            }),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Title::Deferred(_))
    }
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Title::Literal(title) => f.debug_tuple("Literal").field(title).finish(),
            Title::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

// Deferred titles compare by producer identity.
impl PartialEq for Title {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Title::Literal(a), Title::Literal(b)) => a == b,
            (Title::Deferred(a), Title::Deferred(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Title {
    fn from(title: &str) -> Self {
        Title::literal(title)
    }
}

impl From<String> for Title {
    fn from(title: String) -> Self {
        Title::Literal(title)
    }
}

impl<'de> Deserialize<'de> for Title {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Title::Literal)
    }
}

/// Role of the viewer, e.g. `admin`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Role::new(role)
    }
}

/// Deployment mode discriminator, e.g. `posix` or `globus`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportType(String);

impl ExportType {
    pub fn new(export_type: impl Into<String>) -> Self {
        Self(export_type.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExportType {
    fn from(export_type: &str) -> Self {
        ExportType::new(export_type)
    }
}

/// When a navigation entry is shown
#[derive(Clone, Default)]
pub enum Visibility {
    #[default]
    Always,
    /// `None` leaves that dimension unrestricted; an empty list admits nobody.
    AllowList {
        roles: Option<Vec<Role>>,
        export_types: Option<Vec<ExportType>>,
    },
    Custom(VisibilityPredicate),
}

impl Visibility {
    pub fn for_roles<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        Visibility::AllowList {
            roles: Some(roles.into_iter().map(Into::into).collect()),
            export_types: None,
        }
    }

    pub fn for_export_types<I, E>(export_types: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ExportType>,
    {
        Visibility::AllowList {
            roles: None,
            export_types: Some(export_types.into_iter().map(Into::into).collect()),
        }
    }

    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Role, &ExportType) -> bool + Send + Sync + 'static,
    {
        Visibility::Custom(Arc::new(predicate))
    }

    pub fn is_visible(&self, role: &Role, export_type: &ExportType) -> bool {
        match self {
            Visibility::Always => true,
            Visibility::AllowList {
                roles,
                export_types,
            } => {
                roles.as_ref().is_none_or(|r| r.contains(role))
                    && export_types
                        .as_ref()
                        .is_none_or(|e| e.contains(export_type))
            }
            Visibility::Custom(predicate) => predicate(role, export_type),
        }
    }
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Always => f.write_str("Always"),
            Visibility::AllowList {
                roles,
                export_types,
            } => f
                .debug_struct("AllowList")
                .field("roles", roles)
                .field("export_types", export_types)
                .finish(),
            Visibility::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for Visibility {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Visibility::Always, Visibility::Always) => true,
            (
                Visibility::AllowList {
                    roles: a_roles,
                    export_types: a_types,
                },
                Visibility::AllowList {
                    roles: b_roles,
                    export_types: b_types,
                },
            ) => a_roles == b_roles && a_types == b_types,
            (Visibility::Custom(a), Visibility::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// One entry of the static navigation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItemConfig {
    pub title: Title,
    pub href: Option<String>,
    pub icon: Option<String>,
    pub visibility: Visibility,
    pub children: Vec<NavigationItemConfig>,
}

impl NavigationItemConfig {
    pub fn new(title: impl Into<Title>) -> Self {
        NavigationItemConfig {
            title: title.into(),
            href: None,
            icon: None,
            visibility: Visibility::Always,
            children: Vec::new(),
        }
    }

    pub fn href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn child(mut self, child: NavigationItemConfig) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_visible(&self, role: &Role, export_type: &ExportType) -> bool {
        self.visibility.is_visible(role, export_type)
    }
}

/// A composed entry, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    /// Rendering key; always the resolved title
    pub key: String,
    pub title: String,
    pub href: Option<String>,
    pub icon: Option<String>,
    pub children: Vec<NavigationItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Role {
        Role::new("admin")
    }

    fn posix() -> ExportType {
        ExportType::new("posix")
    }

    #[test]
    fn test_literal_title_resolves_verbatim() {
        assert_eq!(Title::from("Home").resolve().unwrap(), "Home");
        assert!(!Title::from("Home").is_deferred());
    }

    #[test]
    fn test_deferred_title_is_invoked_on_resolve() {
        let title = Title::deferred(|| "Config".to_string());
        assert!(title.is_deferred());
        assert_eq!(title.resolve().unwrap(), "Config");
    }

    #[test]
    fn test_failing_producer_propagates() {
        let title = Title::try_deferred(|| Err(anyhow::anyhow!("flag service unavailable")));
        let err = title.resolve().unwrap_err();
        assert!(matches!(err, AppError::TitleProducer(_)));
        assert!(err.to_string().contains("flag service unavailable"));
    }

    #[test]
    fn test_deferred_titles_compare_by_identity() {
        let title = Title::deferred(|| "Config".to_string());
        assert_eq!(title, title.clone());
        assert_ne!(title, Title::deferred(|| "Config".to_string()));
        assert_ne!(title, Title::from("Config"));
    }

    #[test]
    fn test_always_visible() {
        assert!(Visibility::Always.is_visible(&admin(), &posix()));
        assert!(Visibility::default().is_visible(&Role::new("guest"), &ExportType::new("s3")));
    }

    #[test]
    fn test_role_allow_list() {
        let visibility = Visibility::for_roles(["admin"]);
        assert!(visibility.is_visible(&admin(), &posix()));
        assert!(!visibility.is_visible(&Role::new("user"), &posix()));
    }

    #[test]
    fn test_export_type_allow_list() {
        let visibility = Visibility::for_export_types(["globus"]);
        assert!(visibility.is_visible(&admin(), &ExportType::new("globus")));
        assert!(!visibility.is_visible(&admin(), &posix()));
    }

    #[test]
    fn test_empty_allow_list_admits_nobody() {
        let visibility = Visibility::AllowList {
            roles: Some(vec![]),
            export_types: None,
        };
        assert!(!visibility.is_visible(&admin(), &posix()));

        let unrestricted = Visibility::AllowList {
            roles: None,
            export_types: None,
        };
        assert!(unrestricted.is_visible(&admin(), &posix()));
    }

    #[test]
    fn test_custom_predicate() {
        let visibility = Visibility::when(|role, export_type| {
            role.as_str() == "admin" || export_type.as_str() == "s3"
        });
        assert!(visibility.is_visible(&admin(), &posix()));
        assert!(visibility.is_visible(&Role::new("user"), &ExportType::new("s3")));
        assert!(!visibility.is_visible(&Role::new("user"), &posix()));
    }

    #[test]
    fn test_item_builder() {
        let item = NavigationItemConfig::new("Director")
            .href("/director/")
            .icon("hub")
            .visibility(Visibility::for_roles(["admin"]))
            .child(NavigationItemConfig::new("Servers").href("/director/servers/"));
        assert_eq!(item.href.as_deref(), Some("/director/"));
        assert_eq!(item.icon.as_deref(), Some("hub"));
        assert_eq!(item.children.len(), 1);
        assert!(item.is_visible(&admin(), &posix()));
        assert!(!item.is_visible(&Role::new("user"), &posix()));
    }
}
