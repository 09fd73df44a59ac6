//! Composition of the visible navigation for one viewer
//!
//! `compose` is a pure projection of `(config, role, export_type)`: it keeps
//! configuration order, drops hidden entries (and their children), and
//! resolves titles. Duplicate titles are reported by `ensure_unique_titles`,
//! never silently merged.

use std::collections::HashSet;

use super::types::{ExportType, NavigationItem, NavigationItemConfig, Role};
use crate::shared::{logging, AppError, Result};

/// Compose the navigation entries visible to `role` under `export_type`.
pub fn compose(
    config: &[NavigationItemConfig],
    role: &Role,
    export_type: &ExportType,
) -> Result<Vec<NavigationItem>> {
    let items = compose_level(config, role, export_type)?;
    logging::log_composition_result(
        role.as_str(),
        export_type.as_str(),
        items.len(),
        config.len() - items.len(),
    );
    Ok(items)
}

/// `compose`, then reject sibling entries that resolved to the same title.
pub fn compose_checked(
    config: &[NavigationItemConfig],
    role: &Role,
    export_type: &ExportType,
) -> Result<Vec<NavigationItem>> {
    let items = compose(config, role, export_type)?;
    ensure_unique_titles(&items)?;
    Ok(items)
}

fn compose_level(
    config: &[NavigationItemConfig],
    role: &Role,
    export_type: &ExportType,
) -> Result<Vec<NavigationItem>> {
    config
        .iter()
        .filter(|entry| entry.is_visible(role, export_type))
        .map(|entry| {
            let title = entry.title.resolve()?;
            Ok(NavigationItem {
                key: title.clone(),
                title,
                href: entry.href.clone(),
                icon: entry.icon.clone(),
                children: compose_level(&entry.children, role, export_type)?,
            })
        })
        .collect()
}

/// Titles shared by two or more siblings, in first-seen order. Keys only
/// need to be unique within one list, so each children list is checked on
/// its own.
pub fn find_duplicate_titles(items: &[NavigationItem]) -> Vec<String> {
    let mut duplicates = Vec::new();
    collect_duplicates(items, &mut duplicates);
    duplicates
}

fn collect_duplicates(items: &[NavigationItem], duplicates: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.key.as_str()) && !duplicates.contains(&item.key) {
            duplicates.push(item.key.clone());
        }
    }
    for item in items {
        collect_duplicates(&item.children, duplicates);
    }
}

pub fn ensure_unique_titles(items: &[NavigationItem]) -> Result<()> {
    let duplicates = find_duplicate_titles(items);
    match duplicates.first() {
        None => Ok(()),
        Some(first) => {
            logging::log_duplicate_titles(&duplicates);
            Err(AppError::DuplicateTitle(first.clone()))
        }
    }
}
