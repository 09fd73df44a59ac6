use serde::{Deserialize, Deserializer, Serialize};

use super::{Capabilities, DirectorNamespace, NamespacePath};
use crate::shared::{logging, AppError, Result};

/// Server role in the federation topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerType {
    Origin,
    Cache,
}

impl ServerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerType::Origin => "Origin",
            ServerType::Cache => "Cache",
        }
    }
}

/// A resolved position, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Fields shared by the general and detailed server views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerBase {
    pub name: String,
    pub storage_type: String,
    pub disable_director_test: bool,
    pub auth_url: String,
    pub broker_url: String,
    pub url: String,
    pub web_url: String,
    #[serde(rename = "type")]
    pub server_type: ServerType,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub capabilities: Capabilities,
    pub filtered: bool,
    pub filtered_type: String,
    pub from_topology: bool,
    pub health_status: String,
    #[serde(deserialize_with = "non_negative_load")]
    pub io_load: f64,
}

impl ServerBase {
    /// Known location of the server.
    ///
    /// The director reports `0, 0` when it could not resolve a location, so
    /// that pair is treated the same as a missing coordinate.
    pub fn location(&self) -> Option<GeoLocation> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) if latitude != 0.0 || longitude != 0.0 => {
                Some(GeoLocation {
                    latitude,
                    longitude,
                })
            }
            _ => None,
        }
    }

    /// Same server identity (name and URL)
    pub fn same_server(&self, other: &ServerBase) -> bool {
        self.name == other.name && self.url == other.url
    }
}

fn non_negative_load<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let load = f64::deserialize(deserializer)?;
    if !load.is_finite() || load < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "ioLoad must be a non-negative number, got {load}"
        )));
    }
    Ok(load)
}

/// Server with its full namespace listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawServer")]
pub struct ServerDetailed {
    #[serde(flatten)]
    pub base: ServerBase,
    pub namespaces: Vec<DirectorNamespace>,
}

/// Lightweight server summary carrying only namespace prefixes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawServer")]
pub struct ServerGeneral {
    #[serde(flatten)]
    pub base: ServerBase,
    pub namespace_prefixes: Vec<NamespacePath>,
}

/// Wire shape of either view. A payload may carry both projections, but
/// they must agree.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawServer {
    #[serde(flatten)]
    base: ServerBase,
    #[serde(default)]
    namespaces: Option<Vec<DirectorNamespace>>,
    #[serde(default)]
    namespace_prefixes: Option<Vec<NamespacePath>>,
}

/// Namespace paths in listing order, first occurrence wins
fn prefixes_of(namespaces: &[DirectorNamespace]) -> Vec<NamespacePath> {
    let mut prefixes: Vec<NamespacePath> = Vec::with_capacity(namespaces.len());
    for ns in namespaces {
        if !prefixes.contains(&ns.path) {
            prefixes.push(ns.path.clone());
        }
    }
    prefixes
}

fn projection_mismatch(base: &ServerBase, general: usize, detailed: usize) -> AppError {
    logging::log_projection_mismatch(&base.name, base.server_type.as_str(), general, detailed);
    AppError::ProjectionMismatch {
        server: base.name.clone(),
    }
}

impl RawServer {
    fn ensure_consistent(&self) -> Result<()> {
        if let (Some(namespaces), Some(prefixes)) = (&self.namespaces, &self.namespace_prefixes) {
            if prefixes_of(namespaces) != *prefixes {
                return Err(projection_mismatch(&self.base, prefixes.len(), namespaces.len()));
            }
        }
        Ok(())
    }
}

impl TryFrom<RawServer> for ServerDetailed {
    type Error = String;

    fn try_from(raw: RawServer) -> std::result::Result<Self, Self::Error> {
        raw.ensure_consistent().map_err(|e| e.to_string())?;
        let namespaces = raw.namespaces.ok_or("missing field `namespaces`")?;
        Ok(ServerDetailed {
            base: raw.base,
            namespaces,
        })
    }
}

impl TryFrom<RawServer> for ServerGeneral {
    type Error = String;

    fn try_from(raw: RawServer) -> std::result::Result<Self, Self::Error> {
        raw.ensure_consistent().map_err(|e| e.to_string())?;
        let namespace_prefixes = raw
            .namespace_prefixes
            .ok_or("missing field `namespacePrefixes`")?;
        Ok(ServerGeneral {
            base: raw.base,
            namespace_prefixes,
        })
    }
}

impl ServerDetailed {
    pub fn namespace_prefixes(&self) -> Vec<NamespacePath> {
        prefixes_of(&self.namespaces)
    }

    pub fn to_general(&self) -> ServerGeneral {
        ServerGeneral {
            base: self.base.clone(),
            namespace_prefixes: self.namespace_prefixes(),
        }
    }

    pub fn orphaned_namespaces(&self) -> impl Iterator<Item = &DirectorNamespace> {
        self.namespaces.iter().filter(|ns| ns.is_orphaned())
    }
}

impl ServerGeneral {
    /// Check that this summary is the projection of `detailed`.
    pub fn ensure_projection_of(&self, detailed: &ServerDetailed) -> Result<()> {
        if self.base.same_server(&detailed.base)
            && self.namespace_prefixes == detailed.namespace_prefixes()
        {
            return Ok(());
        }
        Err(projection_mismatch(
            &self.base,
            self.namespace_prefixes.len(),
            detailed.namespaces.len(),
        ))
    }
}
