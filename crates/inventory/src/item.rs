use serde::{Deserialize, Serialize};

/// A single line of stock.
///
/// The name decides which rule applies (see [`crate::Catalog`]); the updater
/// only ever touches `sell_in` and `quality`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    /// Days left before the sell-by date. Negative once expired.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// `sell_in <= 0`, evaluated before the day's decrement.
    pub fn is_expired(&self) -> bool {
        self.sell_in <= 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
