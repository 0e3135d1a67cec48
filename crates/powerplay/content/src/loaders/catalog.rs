//! Activity catalog loader.

use std::path::Path;

use anyhow::Context;
use powerplay_core::{ActivityCatalog, ActivityDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_ACTIVITIES: &str = include_str!("../../data/activities.ron");

/// Activity table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFile {
    pub activities: Vec<ActivityDefinition>,
}

/// Loader for the activity catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// The catalog compiled into this crate.
    pub fn embedded() -> LoadResult<ActivityCatalog> {
        Self::parse(EMBEDDED_ACTIVITIES).context("Failed to parse embedded activity catalog")
    }

    /// Load an activity catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ActivityCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)
            .with_context(|| format!("Failed to parse activity catalog {}", path.display()))?;
        tracing::debug!("loaded {} activities from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ActivityCatalog> {
        let file: ActivityFile = ron::from_str(content)?;
        Ok(ActivityCatalog::new(file.activities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_header_marks_power_lists_illustrative() {
        let header: String = EMBEDDED_ACTIVITIES
            .lines()
            .take_while(|line| line.starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(header.contains("`bonus` and `vulnerable`"), "{header}");
        assert!(header.contains("illustrative"), "{header}");
    }

    #[test]
    fn parses_minimal_entry_with_defaults() {
        let catalog = CatalogLoader::parse(
            r#"(
                activities: [
                    (name: "Exobiology", category: Misc, supports: "REINFORCE"),
                ],
            )"#,
        )
        .unwrap();

        let def = catalog.by_name("Exobiology").unwrap();
        assert!(def.legal);
        assert!(!def.stronghold_carrier);
        assert!(def.condition.is_none());
        assert!(def.details.is_empty());
    }

    #[test]
    fn rejects_unknown_powers() {
        let result = CatalogLoader::parse(
            r#"(
                activities: [
                    (name: "X", category: Misc, supports: "", vulnerable: ["Emperor Hengist"]),
                ],
            )"#,
        );
        assert!(result.is_err());
    }
}
