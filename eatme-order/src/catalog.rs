//! Menu catalog: categories, day sections, items and add-ons.
use crate::addons::AddOnCatalog;
use crate::selection::MenuEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate menu item id: {0}")]
    DuplicateItem(String),
    #[error("Duplicate add-on id: {0}")]
    DuplicateAddOn(String),
    #[error("Menu item {item} references unknown category {category}")]
    UnknownCategory { item: String, category: String },
}

/// Picture shown for a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemImage {
    /// Image path relative to the site's asset root
    Src(String),
    /// Emoji stand-in when there is no photo
    Emoji(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price as displayed, e.g. `GH₵ 25`
    pub price: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<ItemImage>,
}

/// Items grouped under an optional day heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    #[serde(default)]
    pub day: Option<String>,
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    #[must_use]
    pub fn day_label(&self) -> &str {
        self.day.as_deref().unwrap_or_default()
    }
}

/// Which items the menu tabs currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a tab's category key; `all` selects everything.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key == "all" {
            Self::All
        } else {
            Self::Only(key.to_string())
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(category) => category,
        }
    }

    #[must_use]
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub categories: Vec<MenuCategory>,
    pub sections: Vec<MenuSection>,
    #[serde(default)]
    pub add_ons: AddOnCatalog,
}

impl Menu {
    /// Parse and validate menu JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, an item id repeats or an
    /// item names a category that does not exist.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let menu: Self = serde_json::from_str(json)?;
        menu.validate()?;
        Ok(menu)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let categories: HashSet<&str> = self.categories.iter().map(|c| c.id.as_str()).collect();
        let mut seen = HashSet::new();
        for (_, item) in self.items() {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
            if !categories.contains(item.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    item: item.id.clone(),
                    category: item.category.clone(),
                });
            }
        }
        let mut add_on_ids = HashSet::new();
        for add_on in self.add_ons.iter() {
            if !add_on_ids.insert(add_on.id.as_str()) {
                return Err(CatalogError::DuplicateAddOn(add_on.id.to_string()));
            }
        }
        Ok(())
    }

    /// All items paired with the day of their section.
    pub fn items(&self) -> impl Iterator<Item = (&str, &MenuItem)> {
        self.sections.iter().flat_map(|section| {
            let day = section.day_label();
            section.items.iter().map(move |item| (day, item))
        })
    }

    /// Items visible under `filter`, with their day.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a CategoryFilter,
    ) -> impl Iterator<Item = (&'a str, &'a MenuItem)> + 'a {
        self.items().filter(move |(_, item)| filter.matches(item))
    }

    /// Capture a menu item as the input for a new selection.
    #[must_use]
    pub fn entry_for(&self, item_id: &str) -> Option<MenuEntry> {
        self.items()
            .find(|(_, item)| item.id == item_id)
            .map(|(day, item)| {
                MenuEntry::new(item.name.clone(), item.price.clone(), day)
                    .with_image(item.image.clone())
            })
    }
}
