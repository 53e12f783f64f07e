//! Paid add-ons that can be attached to any menu item.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an add-on, e.g. `extra-sauce`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddOnId(String);

impl AddOnId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddOnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AddOnId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single add-on with its surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: AddOnId,
    /// Surcharge in the smallest currency unit
    pub price: u32,
    /// Display label; derived from the id when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AddOn {
    #[must_use]
    pub fn new(id: impl Into<String>, price: u32) -> Self {
        Self {
            id: AddOnId::new(id),
            price,
            label: None,
        }
    }

    /// Label used in the modal and in the order message.
    #[must_use]
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| default_label(self.id.as_str()))
    }
}

/// Derive a readable label from an add-on id by turning its first `-` into a
/// space: `extra-sauce` becomes `extra sauce`.
#[must_use]
pub fn default_label(id: &str) -> String {
    id.replacen('-', " ", 1)
}

/// Static add-on configuration, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddOnCatalog {
    add_ons: Vec<AddOn>,
}

impl AddOnCatalog {
    #[must_use]
    pub const fn new(add_ons: Vec<AddOn>) -> Self {
        Self { add_ons }
    }

    #[must_use]
    pub fn find(&self, id: &AddOnId) -> Option<&AddOn> {
        self.add_ons.iter().find(|add_on| add_on.id == *id)
    }

    /// Selected add-ons in catalog order, regardless of the order they were
    /// picked in.
    pub fn selected<'a>(&'a self, chosen: &'a [AddOnId]) -> impl Iterator<Item = &'a AddOn> + 'a {
        self.add_ons
            .iter()
            .filter(move |add_on| chosen.contains(&add_on.id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AddOn> {
        self.add_ons.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.add_ons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add_ons.is_empty()
    }
}
