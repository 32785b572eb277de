//! Category registry
//!
//! Categories are plain labels drawn from a fixed, ordered list that is
//! loaded once at startup. Both the expense form and the list filter offer
//! exactly these choices, in this order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Labels used when no categories are configured
pub const DEFAULT_CATEGORIES: &[&str] = &["Groceries", "Utilities", "Entertainment"];

/// The ordered, read-only set of allowed category labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryRegistry {
    labels: Vec<String>,
}

impl CategoryRegistry {
    /// Build a registry from labels, keeping their order
    pub fn new<I, S>(labels: I) -> Result<Self, CategoryRegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            let trimmed = label.trim();
            if trimmed.is_empty() {
                return Err(CategoryRegistryError::EmptyLabel);
            }
            if collected.iter().any(|existing| existing == trimmed) {
                return Err(CategoryRegistryError::Duplicate(trimmed.to_string()));
            }
            collected.push(trimmed.to_string());
        }

        if collected.is_empty() {
            return Err(CategoryRegistryError::NoCategories);
        }

        Ok(Self { labels: collected })
    }

    /// Check whether a label is exactly one of the registry entries
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Position of a label in the registry
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Get a label by position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Iterate over the labels in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// All labels as a slice
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            labels: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for CategoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(", "))
    }
}

impl TryFrom<Vec<String>> for CategoryRegistry {
    type Error = CategoryRegistryError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<CategoryRegistry> for Vec<String> {
    fn from(registry: CategoryRegistry) -> Self {
        registry.labels
    }
}

/// Errors building a category registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRegistryError {
    NoCategories,
    EmptyLabel,
    Duplicate(String),
}

impl fmt::Display for CategoryRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCategories => write!(f, "At least one category is required"),
            Self::EmptyLabel => write!(f, "Category name cannot be empty"),
            Self::Duplicate(name) => write!(f, "Duplicate category: {}", name),
        }
    }
}

impl std::error::Error for CategoryRegistryError {}
