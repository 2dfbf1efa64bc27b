//! The updater: owns the items and advances them one day at a time.

use crate::catalog::Catalog;
use crate::category::Category;
use crate::item::Item;
use crate::snapshot::DaySnapshot;

/// Advance every item in `items` by one day, classifying each by name.
///
/// Use this when the caller keeps its own storage. [`Inventory`] classifies
/// once up front instead of on every call.
pub fn advance_one_day(items: &mut [Item], catalog: &Catalog) {
    for item in items.iter_mut() {
        catalog.classify(&item.name).advance(item);
    }
}

/// A collection of items with their categories resolved once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    categories: Vec<Category>,
    catalog: Catalog,
    day: u32,
}

impl Inventory {
    /// Build an inventory classified against [`Catalog::standard`].
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_catalog(items, Catalog::standard())
    }

    pub fn with_catalog(items: Vec<Item>, catalog: Catalog) -> Self {
        let categories = items
            .iter()
            .map(|item| catalog.classify(&item.name))
            .collect();
        Self {
            items,
            categories,
            catalog,
            day: 0,
        }
    }

    pub fn push(&mut self, item: Item) {
        self.categories.push(self.catalog.classify(&item.name));
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access to the items. Every item is re-classified when the
    /// returned guard is dropped, so a renamed item picks up its new rule.
    pub fn items_mut(&mut self) -> ItemsMut<'_> {
        ItemsMut { inventory: self }
    }

    fn reclassify(&mut self) {
        let catalog = &self.catalog;
        self.categories.clear();
        self.categories
            .extend(self.items.iter().map(|item| catalog.classify(&item.name)));
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Category resolved for each item, in item order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of days advanced since construction.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Advance every item by one day and return them.
    pub fn update_quality(&mut self) -> &[Item] {
        let _span =
            tracing::debug_span!("update_quality", day = self.day.saturating_add(1)).entered();

        for (item, category) in self.items.iter_mut().zip(&self.categories) {
            let before = (item.sell_in, item.quality);
            category.advance(item);
            tracing::trace!(
                name = %item.name,
                category = %category,
                sell_in.before = before.0,
                quality.before = before.1,
                sell_in = item.sell_in,
                quality = item.quality,
                "item advanced"
            );
        }

        self.day = self.day.saturating_add(1);
        tracing::debug!(items = self.items.len(), "day complete");
        &self.items
    }

    /// Current state, labelled with the current day.
    pub fn snapshot(&self) -> DaySnapshot {
        DaySnapshot {
            day: self.day,
            items: self.items.clone(),
        }
    }

    /// Run `days` updates, collecting a snapshot before the first and after
    /// each one (`days + 1` snapshots in total).
    pub fn simulate(&mut self, days: u32) -> Vec<DaySnapshot> {
        let mut snapshots = Vec::with_capacity(days as usize + 1);
        snapshots.push(self.snapshot());
        for _ in 0..days {
            self.update_quality();
            snapshots.push(self.snapshot());
        }
        snapshots
    }
}

/// Mutable view of an [`Inventory`]'s items, returned by
/// [`Inventory::items_mut`].
pub struct ItemsMut<'a> {
    inventory: &'a mut Inventory,
}

impl core::ops::Deref for ItemsMut<'_> {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.inventory.items
    }
}

impl core::ops::DerefMut for ItemsMut<'_> {
    fn deref_mut(&mut self) -> &mut [Item] {
        &mut self.inventory.items
    }
}

impl Drop for ItemsMut<'_> {
    fn drop(&mut self) {
        self.inventory.reclassify();
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl Extend<Item> for Inventory {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MANA_CAKE, SULFURAS};
    use gilded_rose_core::quality;
    use proptest::prelude::*;

    fn update_quality_for_item(name: &str, sell_in: i32, quality: i32) -> Item {
        let mut inventory = Inventory::new(vec![Item::new(name, sell_in, quality)]);
        inventory.update_quality();
        inventory.into_items().remove(0)
    }

    #[test]
    fn ordinary_items_degrade_twice_as_fast_after_sell_by() {
        assert_eq!(update_quality_for_item("Elixir of the Mongoose", 0, 10).quality, 8);
        assert_eq!(update_quality_for_item("+5 Dexterity Vest", 0, 12).quality, 10);
    }

    #[test]
    fn quality_never_goes_negative() {
        assert_eq!(update_quality_for_item("Elixir of the Mongoose", 5, 0).quality, 0);
        assert_eq!(update_quality_for_item("+5 Dexterity Vest", 4, 0).quality, 0);
        assert_eq!(update_quality_for_item(BACKSTAGE_PASSES, -1, 0).quality, 0);
        assert_eq!(update_quality_for_item(CONJURED_MANA_CAKE, 0, 0).quality, 0);
    }

    #[test]
    fn quality_never_exceeds_fifty() {
        assert_eq!(update_quality_for_item(AGED_BRIE, 2, 50).quality, 50);
        assert_eq!(update_quality_for_item(BACKSTAGE_PASSES, 5, 50).quality, 50);
    }

    #[test]
    fn aged_brie_increases_in_quality() {
        assert_eq!(update_quality_for_item(AGED_BRIE, 2, 0).quality, 1);
        assert_eq!(update_quality_for_item(AGED_BRIE, 0, 0).quality, 2);
    }

    #[test]
    fn sulfuras_never_changes() {
        let item = update_quality_for_item(SULFURAS, 0, 80);
        assert_eq!(item.quality, 80);
        assert_eq!(item.sell_in, 0);
    }

    #[test]
    fn backstage_passes_follow_the_concert_schedule() {
        assert_eq!(update_quality_for_item(BACKSTAGE_PASSES, 15, 20).quality, 21);
        for sell_in in 6..=10 {
            assert_eq!(update_quality_for_item(BACKSTAGE_PASSES, sell_in, 20).quality, 22);
        }
        for sell_in in 1..=5 {
            assert_eq!(update_quality_for_item(BACKSTAGE_PASSES, sell_in, 20).quality, 23);
        }
        assert_eq!(update_quality_for_item(BACKSTAGE_PASSES, 0, 20).quality, 0);
    }

    #[test]
    fn conjured_items_degrade_twice_as_fast() {
        assert_eq!(update_quality_for_item(CONJURED_MANA_CAKE, 6, 12).quality, 10);
        assert_eq!(update_quality_for_item(CONJURED_MANA_CAKE, 0, 12).quality, 8);
    }

    #[test]
    fn classic_catalog_degrades_conjured_like_ordinary() {
        let mut inventory = Inventory::with_catalog(
            vec![Item::new(CONJURED_MANA_CAKE, 6, 12)],
            Catalog::classic(),
        );
        assert_eq!(inventory.update_quality()[0].quality, 11);
    }

    #[test]
    fn out_of_range_start_is_left_alone_until_the_first_update() {
        let inventory = Inventory::new(vec![Item::new("Elixir of the Mongoose", 5, 70)]);
        assert_eq!(inventory.items()[0].quality, 70);

        let mut inventory = inventory;
        assert_eq!(inventory.update_quality()[0].quality, 50);
    }

    #[test]
    fn categories_are_resolved_at_construction_and_on_push() {
        let mut inventory = Inventory::new(vec![Item::new(AGED_BRIE, 1, 1)]);
        inventory.push(Item::new(SULFURAS, 0, 80));
        inventory.extend([Item::new("Mystery Box", 3, 3)]);
        assert_eq!(
            inventory.categories(),
            &[Category::AgedBrie, Category::Legendary, Category::Ordinary]
        );
    }

    #[test]
    fn renamed_item_follows_its_new_category() {
        let mut inventory = Inventory::new(vec![Item::new(AGED_BRIE, 5, 10)]);
        inventory.items_mut()[0].name = SULFURAS.to_string();
        assert_eq!(inventory.categories(), &[Category::Legendary]);

        let mut loose = inventory.items().to_vec();
        advance_one_day(&mut loose, &Catalog::standard());

        assert_eq!(inventory.update_quality(), loose.as_slice());
        assert_eq!(inventory.items()[0], Item::new(SULFURAS, 5, 10));
    }

    #[test]
    fn editing_numbers_through_items_mut_keeps_categories() {
        let mut inventory = Inventory::new(vec![Item::new(BACKSTAGE_PASSES, 12, 10)]);
        {
            let mut items = inventory.items_mut();
            items[0].sell_in = 3;
            items[0].quality = 40;
        }
        assert_eq!(inventory.categories(), &[Category::BackstagePass]);
        assert_eq!(inventory.update_quality()[0], Item::new(BACKSTAGE_PASSES, 2, 43));
    }

    #[test]
    fn free_function_matches_inventory() {
        let items = vec![
            Item::new(AGED_BRIE, 1, 49),
            Item::new(BACKSTAGE_PASSES, 11, 10),
            Item::new(SULFURAS, -1, 80),
            Item::new("Elixir of the Mongoose", -2, 3),
        ];
        let mut loose = items.clone();
        advance_one_day(&mut loose, &Catalog::standard());

        let mut inventory = Inventory::new(items);
        assert_eq!(inventory.update_quality(), loose.as_slice());
    }

    #[test]
    fn simulate_returns_day_zero_plus_one_snapshot_per_day() {
        let mut inventory = Inventory::new(vec![Item::new(AGED_BRIE, 2, 0)]);
        let snapshots = inventory.simulate(3);

        assert_eq!(snapshots.len(), 4);
        assert_eq!(snapshots[0].day, 0);
        assert_eq!(snapshots[0].items[0], Item::new(AGED_BRIE, 2, 0));
        assert_eq!(snapshots[3].day, 3);
        // +1, +1, then +2 once expired.
        assert_eq!(snapshots[3].items[0], Item::new(AGED_BRIE, -1, 4));
        assert_eq!(inventory.day(), 3);
    }

    fn any_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(AGED_BRIE.to_string()),
            Just(BACKSTAGE_PASSES.to_string()),
            Just(CONJURED_MANA_CAKE.to_string()),
            "[a-zA-Z +]{0,20}",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after every call, quality of non-legendary items stays in
        /// [0, 50] and sell-in drops by exactly one per call.
        #[test]
        fn non_legendary_items_stay_in_bounds(
            name in any_name(),
            sell_in in -100i32..100,
            quality in 0i32..=50,
            days in 0u32..60,
        ) {
            prop_assume!(name != SULFURAS);
            let mut inventory = Inventory::new(vec![Item::new(name, sell_in, quality)]);
            for _ in 0..days {
                let item = &inventory.update_quality()[0];
                prop_assert!(quality::is_within_bounds(item.quality));
            }
            prop_assert_eq!(inventory.items()[0].sell_in, sell_in - days as i32);
        }

        /// Property: legendary items are identical after any number of days.
        #[test]
        fn legendary_items_never_change(
            sell_in in any::<i32>(),
            quality in any::<i32>(),
            days in 0u32..60,
        ) {
            let original = Item::new(SULFURAS, sell_in, quality);
            let mut inventory = Inventory::new(vec![original.clone()]);
            for _ in 0..days {
                inventory.update_quality();
            }
            prop_assert_eq!(&inventory.items()[0], &original);
        }

        /// Property: an item's next state depends only on its own state.
        #[test]
        fn items_do_not_affect_each_other(
            first in (any_name(), -20i32..20, 0i32..=50),
            second in (any_name(), -20i32..20, 0i32..=50),
        ) {
            let a = Item::new(first.0, first.1, first.2);
            let b = Item::new(second.0, second.1, second.2);

            let mut together = Inventory::new(vec![a.clone(), b.clone()]);
            together.update_quality();

            let mut alone = Inventory::new(vec![a]);
            alone.update_quality();

            prop_assert_eq!(&together.items()[0], &alone.items()[0]);
        }
    }
}
