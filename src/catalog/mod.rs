// Catalog of business archetypes and their enrichment bundles
pub mod archetypes;
pub mod bundles;

use crate::models::{BusinessArchetype, EnrichmentBundle};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

pub use archetypes::builtin_archetypes;
pub use bundles::{builtin_bundles, generic_bundle};

/// Errors that can occur when loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog contains no archetypes")]
    EmptyCatalog,

    #[error("Archetype at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate archetype id: {0}")]
    DuplicateId(String),
}

/// On-disk catalog document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    archetypes: Vec<BusinessArchetype>,
    #[serde(default)]
    enrichment: HashMap<String, EnrichmentBundle>,
}

/// Immutable archetype list plus the enrichment table keyed by archetype id
///
/// Archetype order is significant: it breaks score ties during ranking.
#[derive(Debug, Clone)]
pub struct Catalog {
    archetypes: Vec<BusinessArchetype>,
    enrichment: HashMap<String, EnrichmentBundle>,
}

impl Catalog {
    /// Build a catalog, validating ids and normalising keywords
    pub fn new(
        archetypes: Vec<BusinessArchetype>,
        mut enrichment: HashMap<String, EnrichmentBundle>,
    ) -> Result<Self, CatalogError> {
        if archetypes.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        let mut normalised = Vec::with_capacity(archetypes.len());

        for (position, mut archetype) in archetypes.into_iter().enumerate() {
            let id = archetype.id.trim().to_string();
            if id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateId(id));
            }

            archetype.id = id;
            archetype.keywords = archetype
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            normalised.push(archetype);
        }

        enrichment.retain(|id, _| {
            let known = seen.contains(id);
            if !known {
                tracing::warn!("Ignoring enrichment bundle for unknown archetype: {}", id);
            }
            known
        });

        Ok(Self {
            archetypes: normalised,
            enrichment,
        })
    }

    /// The compiled-in catalog
    ///
    /// The tables are trusted as written; `test_builtin_passes_validation`
    /// keeps them consistent with what `new` enforces.
    pub fn builtin() -> Self {
        Self {
            archetypes: builtin_archetypes(),
            enrichment: builtin_bundles(),
        }
    }

    /// Parse a catalog document:
    /// `{ "archetypes": [...], "enrichment": { "<id>": bundle } }`
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.archetypes, document.enrichment)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Loading catalog from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn archetypes(&self) -> &[BusinessArchetype] {
        &self.archetypes
    }

    pub fn archetype(&self, id: &str) -> Option<&BusinessArchetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }

    /// Enrichment for an archetype, or the generic bundle when none is stored
    pub fn enrichment_for(&self, archetype: &BusinessArchetype) -> EnrichmentBundle {
        match self.enrichment.get(&archetype.id) {
            Some(bundle) => bundle.clone(),
            None => {
                tracing::debug!("No enrichment for {}, using generic bundle", archetype.id);
                generic_bundle(archetype)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessType;

    const SMALL_CATALOG: &str = r#"{
        "archetypes": [
            {
                "id": "pottery",
                "name": "Pottery Studio",
                "type": "goods",
                "keywords": ["Pottery ", "Clay", "  "],
                "description": "Hand-thrown ceramics"
            },
            {
                "id": "yoga",
                "name": "Yoga Classes",
                "type": "service",
                "keywords": ["yoga", "fitness"],
                "description": "Group and private yoga sessions"
            }
        ]
    }"#;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 15);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.archetype("boutique").map(|a| a.name.as_str()), Some("Fashion Boutique"));
        assert!(catalog.archetype("unknown").is_none());
    }

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = Catalog::builtin();
        let validated = Catalog::new(builtin_archetypes(), builtin_bundles()).unwrap();

        // Validation neither renames ids nor rewrites keywords nor drops bundles
        assert_eq!(builtin.archetypes, validated.archetypes);
        assert_eq!(builtin.enrichment, validated.enrichment);

        let ids: HashSet<_> = builtin.archetypes().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), builtin.len());
        for archetype in builtin.archetypes() {
            assert!(archetype.keywords.iter().all(|k| *k == k.trim().to_lowercase()), "{}", archetype.id);
        }
    }

    #[test]
    fn test_from_json_normalises_keywords() {
        let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();

        assert_eq!(catalog.len(), 2);
        let pottery = catalog.archetype("pottery").unwrap();
        assert_eq!(pottery.keywords, vec!["pottery", "clay"]);
        assert_eq!(pottery.business_type, BusinessType::Goods);
    }

    #[test]
    fn test_missing_enrichment_uses_generic_bundle() {
        let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();
        let yoga = catalog.archetype("yoga").unwrap();

        let bundle = catalog.enrichment_for(yoga);

        assert_eq!(bundle.resources.len(), 2);
        assert_eq!(bundle.resources[0].title, "Yoga Classes Course");
        assert_eq!(bundle.resources[1].title, "Business Certification");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Catalog::from_json_str(r#"{"archetypes": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut archetypes = builtin_archetypes();
        archetypes.push(archetypes[0].clone());

        let err = Catalog::new(archetypes, HashMap::new()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "tailoring"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut archetypes = builtin_archetypes();
        archetypes[2].id = "  ".to_string();

        let err = Catalog::new(archetypes, HashMap::new()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId(2)));
    }

    #[test]
    fn test_unknown_enrichment_dropped() {
        let mut enrichment = builtin_bundles();
        let stray = enrichment["tailoring"].clone();
        enrichment.insert("ghost".to_string(), stray);

        let catalog = Catalog::new(builtin_archetypes(), enrichment).unwrap();
        assert!(!catalog.enrichment.contains_key("ghost"));
        assert!(catalog.enrichment.contains_key("tailoring"));
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
