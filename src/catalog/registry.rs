//! Catalog registry for loading and sharing body templates.
//!
//! The registry owns one `Arc` per template. Bodies and body types hold
//! clones of those `Arc`s, so a template lives as long as anything refers
//! to it and is never copied.

use ahash::AHashMap;
use std::path::Path;
use std::sync::Arc;

use super::body_type::BodyType;
use super::humanoid;
use super::part_type::BodyPartType;
use super::schema::{BodyDef, CatalogFile, PartDef};
use crate::core::error::{AnatomyError, Result};

/// Registry of validated part and body templates, indexed by name
#[derive(Debug, Default)]
pub struct CatalogRegistry {
    parts: AHashMap<String, Arc<BodyPartType>>,
    bodies: AHashMap<String, Arc<BodyType>>,
    /// Body names in registration order
    body_order: Vec<String>,
}

impl CatalogRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in humanoid already registered
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        let humanoid = humanoid::body_type()?;
        for part in humanoid.parts() {
            registry.insert_part(part.clone())?;
        }
        registry.register_body(humanoid)?;
        Ok(registry)
    }

    /// Parse and register every entry in a TOML catalog document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut registry = Self::new();
        registry.load_toml_str(content)?;
        Ok(registry)
    }

    /// Load a catalog file from disk into this registry
    pub fn load_file(&mut self, path: &Path) -> Result<Vec<Arc<BodyType>>> {
        let content = std::fs::read_to_string(path)?;
        let loaded = self.load_toml_str(&content)?;
        tracing::info!(path = %path.display(), bodies = loaded.len(), "Loaded body catalog");
        Ok(loaded)
    }

    /// Register the entries of a TOML catalog document, returning the body
    /// types it defined. A body may name any part in the same document or
    /// already in the registry.
    ///
    /// Loading is all or nothing: every entry is validated before any is
    /// registered, so a failed load leaves the registry unchanged.
    pub fn load_toml_str(&mut self, content: &str) -> Result<Vec<Arc<BodyType>>> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut staged_parts: AHashMap<String, Arc<BodyPartType>> = AHashMap::new();
        for def in &file.parts {
            if self.parts.contains_key(&def.name) || staged_parts.contains_key(&def.name) {
                return Err(AnatomyError::DuplicateEntry(def.name.clone()));
            }
            staged_parts.insert(def.name.clone(), Arc::new(self.build_part(def)?));
        }

        let mut staged_bodies: Vec<Arc<BodyType>> = Vec::with_capacity(file.bodies.len());
        for def in &file.bodies {
            let taken = self.bodies.contains_key(&def.name)
                || staged_bodies.iter().any(|b| b.name() == def.name);
            if taken {
                return Err(AnatomyError::DuplicateEntry(def.name.clone()));
            }
            staged_bodies.push(Arc::new(self.build_body(def, &staged_parts)?));
        }

        // Nothing below can collide: names were checked against both maps
        for def in &file.parts {
            if let Some(part) = staged_parts.remove(&def.name) {
                self.insert_part(part)?;
            }
        }
        for body in &staged_bodies {
            self.insert_body(body.clone())?;
        }
        Ok(staged_bodies)
    }

    /// Validate and register a part template
    pub fn register_part(&mut self, part: BodyPartType) -> Result<Arc<BodyPartType>> {
        self.insert_part(Arc::new(part))
    }

    fn insert_part(&mut self, part: Arc<BodyPartType>) -> Result<Arc<BodyPartType>> {
        if self.parts.contains_key(part.name()) {
            return Err(AnatomyError::DuplicateEntry(part.name().to_string()));
        }
        tracing::debug!(part = part.name(), "Registered body part type");
        self.parts.insert(part.name().to_string(), part.clone());
        Ok(part)
    }

    /// Register a body template
    pub fn register_body(&mut self, body: BodyType) -> Result<Arc<BodyType>> {
        self.insert_body(Arc::new(body))
    }

    fn insert_body(&mut self, body: Arc<BodyType>) -> Result<Arc<BodyType>> {
        if self.bodies.contains_key(body.name()) {
            return Err(AnatomyError::DuplicateEntry(body.name().to_string()));
        }
        tracing::debug!(body_type = body.name(), "Registered body type");
        self.body_order.push(body.name().to_string());
        self.bodies.insert(body.name().to_string(), body.clone());
        Ok(body)
    }

    fn build_part(&self, def: &PartDef) -> Result<BodyPartType> {
        BodyPartType::new(&def.name, def.hit_points, def.size, def.importance)
    }

    /// Resolve part names against `staged` first, then the registry
    fn build_body(
        &self,
        def: &BodyDef,
        staged: &AHashMap<String, Arc<BodyPartType>>,
    ) -> Result<BodyType> {
        let parts = def
            .parts
            .iter()
            .map(|name| {
                staged
                    .get(name)
                    .cloned()
                    .or_else(|| self.part(name))
                    .ok_or_else(|| AnatomyError::UnknownPartType(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        BodyType::new(&def.name, def.width, def.height, def.property_base, parts)
    }

    /// Get a part template by name
    pub fn part(&self, name: &str) -> Option<Arc<BodyPartType>> {
        self.parts.get(name).cloned()
    }

    /// Get a body template by name
    pub fn body(&self, name: &str) -> Option<Arc<BodyType>> {
        self.bodies.get(name).cloned()
    }

    /// Get a body template by name, or an error naming it
    pub fn require_body(&self, name: &str) -> Result<Arc<BodyType>> {
        self.body(name)
            .ok_or_else(|| AnatomyError::UnknownBodyType(name.to_string()))
    }

    /// Body names in registration order
    pub fn body_names(&self) -> &[String] {
        &self.body_order
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}
