//! Inventory domain module.
//!
//! This crate contains the daily quality rules for the shop's items,
//! implemented purely as deterministic domain logic (no IO, no storage).
//!
//! ```
//! use gilded_rose_inventory::{Inventory, Item};
//!
//! let mut inventory = Inventory::new(vec![Item::new("Aged Brie", 2, 0)]);
//! let items = inventory.update_quality();
//! assert_eq!(items[0].quality, 1);
//! assert_eq!(items[0].sell_in, 1);
//! ```

pub mod catalog;
pub mod category;
pub mod fixtures;
pub mod inventory;
pub mod item;
pub mod snapshot;

pub use catalog::Catalog;
pub use category::Category;
pub use inventory::{Inventory, ItemsMut, advance_one_day};
pub use item::Item;
pub use snapshot::DaySnapshot;
