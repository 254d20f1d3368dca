//! Tile catalog for template lookup and draft sampling.
//!
//! The `TileCatalog` stores every template a session may place plus the one
//! starter template that seeds a new board. It is read-only once built and
//! is shared between sessions behind an `Arc`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::template::{TemplateId, TileColor, TileTemplate};

/// Errors raised when building a catalog from external data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("template {0} registered twice")]
    DuplicateTemplate(TemplateId),

    #[error("catalog has no starter template")]
    MissingStarter,

    #[error("catalog has more than one starter template ({0} and {1})")]
    MultipleStarters(TemplateId, TemplateId),

    #[error("catalog has no draftable templates")]
    EmptyPool,

    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Registry of tile templates.
///
/// ## Example
///
/// ```
/// use tile_explorer::tiles::{TemplateId, TileCatalog, TileColor, TileTemplate};
///
/// let catalog = TileCatalog::new(TileTemplate::new(TemplateId::new(0), "Home", TileColor::Starter))
///     .with(TileTemplate::new(TemplateId::new(1), "Park", TileColor::Orange));
///
/// assert_eq!(catalog.starter().name, "Home");
/// assert_eq!(catalog.get(TemplateId::new(1)).unwrap().name, "Park");
/// assert_eq!(catalog.draft_pool(), &[TemplateId::new(1)]);
/// ```
#[derive(Clone, Debug)]
pub struct TileCatalog {
    templates: FxHashMap<TemplateId, TileTemplate>,
    /// Draftable templates in registration order.
    pool: Vec<TemplateId>,
    starter: TemplateId,
}

/// Wire form of a catalog.
#[derive(Serialize, Deserialize)]
struct CatalogData {
    templates: Vec<TileTemplate>,
}

impl TileCatalog {
    /// Create a catalog holding only the starter template.
    ///
    /// Panics if `starter` is not of the starter colour.
    #[must_use]
    pub fn new(starter: TileTemplate) -> Self {
        assert!(starter.is_starter(), "Template {} is not a starter", starter.id);
        let id = starter.id;
        let mut templates = FxHashMap::default();
        templates.insert(id, starter);
        Self {
            templates,
            pool: Vec::new(),
            starter: id,
        }
    }

    /// Register a draftable template.
    ///
    /// Panics if a template with the same ID already exists or if it is a
    /// starter.
    pub fn register(&mut self, template: TileTemplate) {
        if self.templates.contains_key(&template.id) {
            panic!("Template with ID {:?} already registered", template.id);
        }
        assert!(!template.is_starter(), "Only one starter template is allowed");
        self.pool.push(template.id);
        self.templates.insert(template.id, template);
    }

    /// Register a template (builder pattern).
    #[must_use]
    pub fn with(mut self, template: TileTemplate) -> Self {
        self.register(template);
        self
    }

    /// Build a catalog from a list of templates, exactly one of which is the starter.
    pub fn from_templates(
        templates: impl IntoIterator<Item = TileTemplate>,
    ) -> Result<Self, CatalogError> {
        let mut starter: Option<TileTemplate> = None;
        let mut rest = Vec::new();

        for template in templates {
            if template.is_starter() {
                if let Some(existing) = &starter {
                    return Err(CatalogError::MultipleStarters(existing.id, template.id));
                }
                starter = Some(template);
            } else {
                rest.push(template);
            }
        }

        let mut catalog = Self::new(starter.ok_or(CatalogError::MissingStarter)?);
        for template in rest {
            if catalog.contains(template.id) {
                return Err(CatalogError::DuplicateTemplate(template.id));
            }
            catalog.register(template);
        }

        if catalog.pool.is_empty() {
            return Err(CatalogError::EmptyPool);
        }
        Ok(catalog)
    }

    /// Parse a catalog from JSON: `{"templates": [ ... ]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_templates(data.templates)
    }

    /// Serialize the catalog to JSON, starter first.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let templates = std::iter::once(self.starter())
            .chain(self.iter_pool())
            .cloned()
            .collect();
        Ok(serde_json::to_string_pretty(&CatalogData { templates })?)
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<&TileTemplate> {
        self.templates.get(&id)
    }

    /// The starter template.
    #[must_use]
    pub fn starter(&self) -> &TileTemplate {
        self.templates
            .get(&self.starter)
            .expect("starter template is inserted at construction")
    }

    /// Check if a template ID is registered.
    #[must_use]
    pub fn contains(&self, id: TemplateId) -> bool {
        self.templates.contains_key(&id)
    }

    /// Number of templates, starter included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// A catalog always holds its starter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Draftable template IDs in registration order.
    #[must_use]
    pub fn draft_pool(&self) -> &[TemplateId] {
        &self.pool
    }

    /// Iterate over draftable templates in registration order.
    pub fn iter_pool(&self) -> impl Iterator<Item = &TileTemplate> {
        self.pool.iter().filter_map(|id| self.templates.get(id))
    }

    /// Find draftable templates by colour.
    pub fn find_by_color(&self, color: TileColor) -> impl Iterator<Item = &TileTemplate> {
        self.iter_pool().filter(move |t| t.color == color)
    }
}
