//! Template catalog of the static crisis definitions sessions are built from.
//!
//! The catalog is parsed once at startup (from the embedded `templates.yaml`
//! or an operator-supplied file) and is read-only afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The catalog shipped with the crate.
pub const BUILTIN_TEMPLATES: &str = include_str!("../../templates.yaml");

/// How severe a crisis is rated by its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Localized incident.
    Low,
    /// Incident needing coordinated response.
    Medium,
    /// Large incident straining local resources.
    High,
    /// Mass-casualty or infrastructure-wide event.
    Critical,
}

/// A responder role defined by a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Display name, e.g. "Medical Team Leader".
    pub name: String,
    /// What the role is accountable for.
    pub responsibility: String,
}

/// Immutable definition of one crisis type.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    /// Canonical crisis key.
    pub key: String,
    /// Additional keys resolving to this template.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Scenario title.
    pub title: String,
    /// Opening description of the crisis.
    pub description: String,
    /// Severity rating.
    pub severity: Severity,
    /// Suggested time budget for the exercise.
    pub time_limit_minutes: u32,
    /// Responder roles, in assignment order.
    pub roles: Vec<RoleDefinition>,
    /// Actions offered before the first decision.
    pub initial_actions: Vec<String>,
    /// Crisis-specific consequences reported after every decision.
    pub consequences: Vec<String>,
    /// Situation summary shown after a decision.
    pub situation: String,
    /// Actions offered after a decision.
    pub follow_up_actions: Vec<String>,
}

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid YAML or does not match the schema.
    #[error("template catalog is not valid: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The designated default key names no template.
    #[error("default template `{0}` is not defined")]
    MissingDefault(String),

    /// Two templates (or a template and an alias) share a key.
    #[error("crisis key `{0}` is defined more than once")]
    DuplicateKey(String),

    /// A template has an empty role list.
    #[error("template `{0}` defines no roles")]
    NoRoles(String),

    /// A template leaves a list it must populate empty.
    #[error("template `{key}` has an empty `{field}` list")]
    EmptyList {
        /// Template key.
        key: String,
        /// Name of the empty list.
        field: &'static str,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    default: String,
    templates: Vec<Template>,
}

/// Normalizes a caller-supplied crisis key: trimmed, lowercased, with dashes
/// and whitespace turned into underscores.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| {
            if c == '-' || c.is_whitespace() {
                '_'
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Lookup table from crisis key to template.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, Template>,
    aliases: BTreeMap<String, String>,
    default_key: String,
}

impl TemplateCatalog {
    /// Loads the catalog embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded document is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_TEMPLATES)
    }

    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed YAML or a template missing
    /// a field, and the other variants when keys collide, the default is
    /// missing, or a template has no roles, consequences or follow-up actions.
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(source)?;

        let mut templates = BTreeMap::new();
        let mut aliases = BTreeMap::new();
        for mut template in document.templates {
            template.key = normalize_key(&template.key);
            if template.roles.is_empty() {
                return Err(CatalogError::NoRoles(template.key));
            }
            for (field, list) in [
                ("consequences", &template.consequences),
                ("follow_up_actions", &template.follow_up_actions),
            ] {
                if list.is_empty() {
                    return Err(CatalogError::EmptyList {
                        key: template.key.clone(),
                        field,
                    });
                }
            }
            for alias in &template.aliases {
                let alias = normalize_key(alias);
                if aliases.insert(alias.clone(), template.key.clone()).is_some() {
                    return Err(CatalogError::DuplicateKey(alias));
                }
            }
            if templates.contains_key(&template.key) {
                return Err(CatalogError::DuplicateKey(template.key));
            }
            templates.insert(template.key.clone(), template);
        }
        if let Some(alias) = aliases.keys().find(|alias| templates.contains_key(*alias)) {
            return Err(CatalogError::DuplicateKey(alias.clone()));
        }

        let default_key = normalize_key(&document.default);
        if !templates.contains_key(&default_key) {
            return Err(CatalogError::MissingDefault(default_key));
        }

        Ok(Self {
            templates,
            aliases,
            default_key,
        })
    }

    /// Returns the template for `key`, or the default template when the key
    /// (after normalization and alias resolution) is unknown.
    #[must_use]
    pub fn lookup(&self, key: &str) -> &Template {
        self.find(key).unwrap_or_else(|| self.default_template())
    }

    /// Returns the template for `key` without falling back.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Template> {
        let key = normalize_key(key);
        let canonical = self.aliases.get(&key).unwrap_or(&key);
        self.templates.get(canonical)
    }

    /// Returns the designated default template.
    #[must_use]
    pub fn default_template(&self) -> &Template {
        // Presence is checked in `from_yaml_str`.
        &self.templates[&self.default_key]
    }

    /// Canonical keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog holds no templates. Always `false` for a loaded
    /// catalog, since the default template must exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
