//! Name → category mapping.
//!
//! Which names get special treatment is configuration: the rules themselves
//! live on [`Category`], so enabling or disabling a category is a matter of
//! adding or removing catalog entries.

use std::collections::HashMap;

use gilded_rose_core::{DomainError, DomainResult};

use crate::category::Category;

pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Exact-name lookup table. Names not in the table are [`Category::Ordinary`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: HashMap<String, Category>,
}

impl Catalog {
    /// A catalog with no special names; everything is ordinary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shop's catalog, Conjured items included.
    pub fn standard() -> Self {
        let mut catalog = Self::classic();
        catalog
            .entries
            .insert(CONJURED_MANA_CAKE.to_string(), Category::Conjured);
        catalog
    }

    /// The catalog before Conjured items were introduced.
    pub fn classic() -> Self {
        let entries = [
            (SULFURAS, Category::Legendary),
            (AGED_BRIE, Category::AgedBrie),
            (BACKSTAGE_PASSES, Category::BackstagePass),
        ]
        .into_iter()
        .map(|(name, category)| (name.to_string(), category))
        .collect();
        Self { entries }
    }

    /// Map `name` to `category`, replacing any previous entry.
    ///
    /// Returns the category previously registered under `name`, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        category: Category,
    ) -> DomainResult<Option<Category>> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("catalog name cannot be empty"));
        }
        Ok(self.entries.insert(name, category))
    }

    /// Builder-style [`Catalog::register`].
    pub fn with(mut self, name: impl Into<String>, category: Category) -> DomainResult<Self> {
        self.register(name, category)?;
        Ok(self)
    }

    /// Drop the entry for `name`; it falls back to ordinary afterwards.
    pub fn unregister(&mut self, name: &str) -> Option<Category> {
        self.entries.remove(name)
    }

    pub fn classify(&self, name: &str) -> Category {
        self.entries
            .get(name)
            .copied()
            .unwrap_or(Category::Ordinary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
