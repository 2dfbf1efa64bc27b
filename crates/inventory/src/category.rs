//! Item categories and their daily quality rules.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use gilded_rose_core::{DomainError, quality};

use crate::item::Item;

/// One case per quality rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality every day, twice as fast once expired.
    Ordinary,
    /// Gains quality with age, twice as fast once expired.
    AgedBrie,
    /// Gains quality as the concert approaches; worthless afterwards.
    BackstagePass,
    /// Degrades twice as fast as an ordinary item.
    Conjured,
    /// Never sold, never degrades.
    Legendary,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ordinary,
        Category::AgedBrie,
        Category::BackstagePass,
        Category::Conjured,
        Category::Legendary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ordinary => "ordinary",
            Category::AgedBrie => "aged_brie",
            Category::BackstagePass => "backstage_pass",
            Category::Conjured => "conjured",
            Category::Legendary => "legendary",
        }
    }

    /// Legendary items are exempt from both the quality rule and the sell-in
    /// countdown.
    pub fn is_frozen(self) -> bool {
        matches!(self, Category::Legendary)
    }

    /// Quality change for one day, based on the item's pre-decrement state.
    ///
    /// Returns `None` for frozen categories.
    pub fn quality_delta(self, item: &Item) -> Option<i32> {
        let expired = item.is_expired();
        let delta = match self {
            Category::Legendary => return None,
            Category::AgedBrie => {
                if expired {
                    2
                } else {
                    1
                }
            }
            Category::BackstagePass => {
                if expired {
                    // Worthless after the concert.
                    item.quality.saturating_neg()
                } else if item.sell_in <= 5 {
                    3
                } else if item.sell_in <= 10 {
                    2
                } else {
                    1
                }
            }
            Category::Conjured => {
                if expired {
                    -4
                } else {
                    -2
                }
            }
            Category::Ordinary => {
                if expired {
                    -2
                } else {
                    -1
                }
            }
        };
        Some(delta)
    }

    /// Advance `item` by one day under this category's rule.
    pub fn advance(self, item: &mut Item) {
        let Some(delta) = self.quality_delta(item) else {
            return;
        };
        item.quality = quality::adjust(item.quality, delta);
        item.sell_in = item.sell_in.saturating_sub(1);
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| DomainError::unknown_category(tag))
    }
}
