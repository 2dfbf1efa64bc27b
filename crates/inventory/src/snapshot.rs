use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The state of every item at the end of a given day (day 0 = before any
/// update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

impl core::fmt::Display for DaySnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "-------- day {} --------", self.day)?;
        writeln!(f, "name, sellIn, quality")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
