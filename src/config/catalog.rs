//! Organization and assignment catalog.
//!
//! Maps an organization key to its GitHub owner and to the repository prefix
//! of each assignment. Student repositories are named `{prefix}-{username}`.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Shown when an organization has no assignments. It has no prefix, so it
/// never produces a repository name.
pub const FALLBACK_ASSIGNMENT: &str = "🧑‍💻Lab: Git Started - Your Profile";

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported catalog format: {0} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// A single assignment offered in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Label shown in the assignment picker
    pub title: String,
    /// Prefix of the per-student repository name
    pub repo_prefix: String,
}

impl Assignment {
    pub fn new(title: impl Into<String>, repo_prefix: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            repo_prefix: repo_prefix.into(),
        }
    }
}

/// A GitHub organization hosting course repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Key used to select the organization
    pub name: String,
    /// GitHub organization/owner login
    pub owner: String,
    /// Assignments in display order
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Organization {
    /// Repository prefix for an assignment title
    #[must_use]
    pub fn prefix_for(&self, title: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.title == title)
            .map(|a| a.repo_prefix.as_str())
    }

    /// Whether `title` is one of this organization's assignments
    #[must_use]
    pub fn has_assignment(&self, title: &str) -> bool {
        self.prefix_for(title).is_some()
    }

    /// Initial selection of the form: the first assignment, or the fallback
    /// title when the list is empty.
    #[must_use]
    pub fn default_assignment(&self) -> &str {
        self.assignments
            .first()
            .map_or(FALLBACK_ASSIGNMENT, |a| a.title.as_str())
    }
}

/// Every organization the form knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub organizations: Vec<Organization>,
}

lazy_static! {
    static ref BUILTIN: Catalog = Catalog {
        organizations: vec![Organization {
            name: "18-341".to_string(),
            owner: "18-341".to_string(),
            assignments: vec![
                Assignment::new("P2: Matrix Multiply", "p2-matrix-multiply"),
                Assignment::new("P3: NOC", "p3-noc"),
            ],
        }],
    };
}

impl Catalog {
    /// The catalog compiled into the binary
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse and validate a TOML catalog
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a YAML catalog
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file, picking the format from its extension.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, CatalogError> = match ext.as_str() {
            "toml" => Self::from_toml_str,
            "yaml" | "yml" => Self::from_yaml_str,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        parse(&content)
    }

    /// Look up an organization by key
    #[must_use]
    pub fn organization(&self, name: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.name == name)
    }

    /// Check the invariants the form relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        for org in &self.organizations {
            if org.name.trim().is_empty() {
                return Err(CatalogError::Invalid("organization name is empty".into()));
            }
            if org.owner.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "organization {} has no owner",
                    org.name
                )));
            }
            if !names.insert(org.name.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate organization {}",
                    org.name
                )));
            }

            let mut titles = HashSet::new();
            for assignment in &org.assignments {
                if !titles.insert(assignment.title.as_str()) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate assignment {:?} in {}",
                        assignment.title, org.name
                    )));
                }
                if assignment.repo_prefix.trim().is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "assignment {:?} in {} has an empty repo prefix",
                        assignment.title, org.name
                    )));
                }
            }
        }
        Ok(())
    }
}
