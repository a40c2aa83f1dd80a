//! Derived views over the inventory - grouping, detection, statistics, and
//! criteria filtering.
//!
//! Everything here is a pure, synchronous function of an item snapshot the
//! caller already fetched: no I/O, no mutation, safe to recompute as often
//! as the snapshot or the criteria change. The stored item status and the
//! quantity bookkeeping are treated as independent signals throughout; where
//! they disagree, each view applies its own rule rather than reconciling
//! them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::item::ItemWithRelations;
use crate::entities::{ItemStatus, category};

/// Bucket name for items without a single category join.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// How many days ahead the expiring-soon window reaches, inclusive.
pub const EXPIRING_SOON_DAYS: i64 = 7;

/// A named bucket of items produced by [`group_by_category`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    /// Category name, or [`UNCATEGORIZED`]
    pub name: String,
    /// Items joined to the category (possibly empty for known categories)
    pub items: Vec<ItemWithRelations>,
}

/// Aggregate counts over the snapshot.
///
/// The three sub-counts go by the stored status field exclusively; the
/// quantity heuristic of [`low_stock_items`] deliberately plays no part
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InventoryStats {
    /// Number of items in the snapshot
    pub total: usize,
    /// Items with stored status `low_stock`
    pub low_stock: usize,
    /// Items with stored status `expired`
    pub expired: usize,
    /// Items with stored status `out_of_stock`
    pub out_of_stock: usize,
}

/// Criteria for [`filter_items`]. All present criteria must hold.
///
/// `status` and `category` accept the sentinel `"all"` (and the empty
/// string) as "no constraint"; `category` is compared against joined
/// category ids in their string form.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ItemCriteria {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Groups the snapshot by known category, in the given category order.
///
/// Every known category gets a bucket with the items holding at least one
/// join to it; an item joined to N categories shows up in N buckets. Items
/// with no category join collect in a trailing [`UNCATEGORIZED`] bucket,
/// which is present only when non-empty.
#[must_use]
pub fn group_by_category(
    items: &[ItemWithRelations],
    categories: &[category::Model],
) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = categories
        .iter()
        .map(|category| CategoryGroup {
            name: category.name.clone(),
            items: items
                .iter()
                .filter(|item| item.categories.iter().any(|c| c.id == category.id))
                .cloned()
                .collect(),
        })
        .collect();

    let uncategorized: Vec<ItemWithRelations> = items
        .iter()
        .filter(|item| item.categories.is_empty())
        .cloned()
        .collect();

    if !uncategorized.is_empty() {
        groups.push(CategoryGroup {
            name: UNCATEGORIZED.to_string(),
            items: uncategorized,
        });
    }

    groups
}

/// Partitions the snapshot by stored status; one bucket per value present.
#[must_use]
pub fn group_by_status(
    items: &[ItemWithRelations],
) -> BTreeMap<ItemStatus, Vec<ItemWithRelations>> {
    let mut groups: BTreeMap<ItemStatus, Vec<ItemWithRelations>> = BTreeMap::new();
    for item in items {
        groups
            .entry(item.item.status)
            .or_default()
            .push(item.clone());
    }
    groups
}

/// Items that need restocking.
///
/// An item qualifies when its tracked quantity has fallen to or below its
/// minimum, OR its stored status says `low_stock` or `out_of_stock`. The
/// three conditions are independent; any one of them is enough.
#[must_use]
pub fn low_stock_items(items: &[ItemWithRelations]) -> Vec<ItemWithRelations> {
    items
        .iter()
        .filter(|item| {
            let below_minimum = match (item.item.quantity, item.item.min_quantity) {
                (Some(quantity), Some(min_quantity)) => quantity <= min_quantity,
                _ => false,
            };
            below_minimum
                || item.item.status == ItemStatus::LowStock
                || item.item.status == ItemStatus::OutOfStock
        })
        .cloned()
        .collect()
}

/// Items whose expiration date falls within the inclusive window
/// `[today, today + 7 days]`.
///
/// Already-expired items do not qualify; they surface through the `expired`
/// status instead, if so flagged. The two need not agree.
#[must_use]
pub fn expiring_soon_items(items: &[ItemWithRelations], today: NaiveDate) -> Vec<ItemWithRelations> {
    let window_end = today + chrono::Duration::days(EXPIRING_SOON_DAYS);
    items
        .iter()
        .filter(|item| {
            item.item
                .expiration_date
                .is_some_and(|expiration| expiration >= today && expiration <= window_end)
        })
        .cloned()
        .collect()
}

/// Aggregate counts over the snapshot, by stored status only.
#[must_use]
pub fn inventory_stats(items: &[ItemWithRelations]) -> InventoryStats {
    InventoryStats {
        total: items.len(),
        low_stock: items
            .iter()
            .filter(|i| i.item.status == ItemStatus::LowStock)
            .count(),
        expired: items
            .iter()
            .filter(|i| i.item.status == ItemStatus::Expired)
            .count(),
        out_of_stock: items
            .iter()
            .filter(|i| i.item.status == ItemStatus::OutOfStock)
            .count(),
    }
}

/// Filters the snapshot by conjunctive criteria.
///
/// Status must match exactly unless absent or `"all"`; search matches
/// case-insensitively against name or description; category matches when
/// some joined category's id equals the given value unless absent or
/// `"all"`. Always returns a vector, empty when nothing matches.
#[must_use]
pub fn filter_items(items: &[ItemWithRelations], criteria: &ItemCriteria) -> Vec<ItemWithRelations> {
    let status = criteria
        .status
        .as_deref()
        .filter(|s| !s.is_empty() && *s != "all");
    let category = criteria
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != "all");
    let search = criteria
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    items
        .iter()
        .filter(|item| {
            if let Some(status) = status {
                if item.item.status.as_str() != status {
                    return false;
                }
            }
            if let Some(search) = &search {
                let matches_name = item.item.name.to_lowercase().contains(search);
                let matches_description = item
                    .item
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(search));
                if !matches_name && !matches_description {
                    return false;
                }
            }
            if let Some(category) = category {
                let has_category = item
                    .categories
                    .iter()
                    .any(|c| c.id.to_string() == category);
                if !has_category {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{category, item};
    use chrono::Utc;

    fn sample_item(id: i64, name: &str, status: ItemStatus) -> ItemWithRelations {
        let now = Utc::now();
        ItemWithRelations {
            item: item::Model {
                id,
                name: name.to_string(),
                description: None,
                quantity: None,
                min_quantity: None,
                status,
                unit: None,
                expiration_date: None,
                purchase_date: None,
                image_url: None,
                notes: None,
                created_by: None,
                created_at: now,
                updated_at: now,
            },
            categories: Vec::new(),
            tags: Vec::new(),
        }
    }

    fn sample_category(id: i64, name: &str) -> category::Model {
        let now = Utc::now();
        category::Model {
            id,
            name: name.to_string(),
            description: None,
            color: None,
            icon: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn with_categories(
        mut item: ItemWithRelations,
        categories: &[&category::Model],
    ) -> ItemWithRelations {
        item.categories = categories.iter().map(|c| (*c).clone()).collect();
        item
    }

    fn with_quantity(
        mut item: ItemWithRelations,
        quantity: Option<f64>,
        min_quantity: Option<f64>,
    ) -> ItemWithRelations {
        item.item.quantity = quantity;
        item.item.min_quantity = min_quantity;
        item
    }

    fn with_expiration(mut item: ItemWithRelations, expiration: NaiveDate) -> ItemWithRelations {
        item.item.expiration_date = Some(expiration);
        item
    }

    fn with_description(mut item: ItemWithRelations, description: &str) -> ItemWithRelations {
        item.item.description = Some(description.to_string());
        item
    }

    #[test]
    fn test_group_by_category_buckets_and_overlap() {
        let dairy = sample_category(1, "Dairy");
        let breakfast = sample_category(2, "Breakfast");

        let milk = with_categories(sample_item(1, "Milk", ItemStatus::InStock), &[&dairy]);
        let eggs = with_categories(
            sample_item(2, "Eggs", ItemStatus::InStock),
            &[&dairy, &breakfast],
        );

        let groups = group_by_category(&[milk, eggs], &[dairy.clone(), breakfast.clone()]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Dairy");
        assert_eq!(groups[0].items.len(), 2);
        // An item with two categories appears in both buckets
        assert_eq!(groups[1].name, "Breakfast");
        assert_eq!(groups[1].items.len(), 1);
        assert_eq!(groups[1].items[0].item.name, "Eggs");
    }

    #[test]
    fn test_group_by_category_uncategorized_bucket() {
        let dairy = sample_category(1, "Dairy");
        let milk = with_categories(sample_item(1, "Milk", ItemStatus::InStock), &[&dairy]);
        let sponge = sample_item(2, "Sponge", ItemStatus::InStock);

        let groups = group_by_category(&[milk.clone(), sponge], &[dairy.clone()]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].name, UNCATEGORIZED);
        assert_eq!(groups[1].items.len(), 1);
        assert_eq!(groups[1].items[0].item.name, "Sponge");

        // No uncategorized items, no uncategorized bucket
        let groups = group_by_category(&[milk], &[dairy]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Dairy");
    }

    #[test]
    fn test_group_by_category_keeps_empty_known_categories() {
        let dairy = sample_category(1, "Dairy");
        let groups = group_by_category(&[], &[dairy]);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].items.is_empty());
    }

    #[test]
    fn test_group_by_status_partitions_exactly() {
        let items = vec![
            sample_item(1, "Milk", ItemStatus::InStock),
            sample_item(2, "Eggs", ItemStatus::InStock),
            sample_item(3, "Yoghurt", ItemStatus::Expired),
        ];

        let groups = group_by_status(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&ItemStatus::InStock].len(), 2);
        assert_eq!(groups[&ItemStatus::Expired].len(), 1);
        assert!(!groups.contains_key(&ItemStatus::LowStock));
    }

    #[test]
    fn test_low_stock_quantity_rule_beats_status() {
        // Status says in_stock, the quantity comparison still flags it
        let item = with_quantity(
            sample_item(1, "Milk", ItemStatus::InStock),
            Some(2.0),
            Some(5.0),
        );
        let low = low_stock_items(&[item]);
        assert_eq!(low.len(), 1);
    }

    #[test]
    fn test_low_stock_boundary_is_inclusive() {
        let item = with_quantity(
            sample_item(1, "Milk", ItemStatus::InStock),
            Some(5.0),
            Some(5.0),
        );
        assert_eq!(low_stock_items(&[item]).len(), 1);

        let item = with_quantity(
            sample_item(2, "Eggs", ItemStatus::InStock),
            Some(6.0),
            Some(5.0),
        );
        assert!(low_stock_items(&[item]).is_empty());
    }

    #[test]
    fn test_low_stock_status_rule_with_null_quantities() {
        let item = sample_item(1, "Milk", ItemStatus::OutOfStock);
        assert_eq!(low_stock_items(&[item]).len(), 1);

        let item = sample_item(2, "Eggs", ItemStatus::LowStock);
        assert_eq!(low_stock_items(&[item]).len(), 1);
    }

    #[test]
    fn test_low_stock_ignores_partial_quantity_tracking() {
        // Only one side of the pair tracked: the quantity rule cannot fire
        let item = with_quantity(sample_item(1, "Milk", ItemStatus::InStock), Some(1.0), None);
        assert!(low_stock_items(&[item]).is_empty());
    }

    #[test]
    fn test_expiring_soon_window() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        let in_three = with_expiration(
            sample_item(1, "Milk", ItemStatus::InStock),
            today + chrono::Duration::days(3),
        );
        let yesterday = with_expiration(
            sample_item(2, "Eggs", ItemStatus::InStock),
            today - chrono::Duration::days(1),
        );
        let in_eight = with_expiration(
            sample_item(3, "Yoghurt", ItemStatus::InStock),
            today + chrono::Duration::days(8),
        );
        let at_boundary = with_expiration(
            sample_item(4, "Butter", ItemStatus::InStock),
            today + chrono::Duration::days(7),
        );
        let today_exact = with_expiration(sample_item(5, "Cream", ItemStatus::InStock), today);
        let undated = sample_item(6, "Salt", ItemStatus::InStock);

        let expiring = expiring_soon_items(
            &[in_three, yesterday, in_eight, at_boundary, today_exact, undated],
            today,
        );
        let names: Vec<_> = expiring.iter().map(|i| i.item.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Butter", "Cream"]);
    }

    #[test]
    fn test_stats_use_stored_status_only() {
        let items = vec![
            // Low by quantity but in_stock by status: counts in total only
            with_quantity(
                sample_item(1, "Milk", ItemStatus::InStock),
                Some(1.0),
                Some(5.0),
            ),
            sample_item(2, "Eggs", ItemStatus::LowStock),
            sample_item(3, "Yoghurt", ItemStatus::Expired),
            sample_item(4, "Flour", ItemStatus::OutOfStock),
        ];

        let stats = inventory_stats(&items);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.out_of_stock, 1);
    }

    #[test]
    fn test_filter_items_empty_input_yields_empty_vec() {
        let filtered = filter_items(
            &[],
            &ItemCriteria {
                status: Some("all".to_string()),
                ..Default::default()
            },
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_items_status_sentinel_and_exact_match() {
        let items = vec![
            sample_item(1, "Milk", ItemStatus::InStock),
            sample_item(2, "Eggs", ItemStatus::Expired),
        ];

        let all = filter_items(
            &items,
            &ItemCriteria {
                status: Some("all".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(all.len(), 2);

        let expired = filter_items(
            &items,
            &ItemCriteria {
                status: Some("expired".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].item.name, "Eggs");
    }

    #[test]
    fn test_filter_items_by_category_id() {
        let dairy = sample_category(7, "Dairy");
        let milk = with_categories(sample_item(1, "Milk", ItemStatus::InStock), &[&dairy]);
        let sponge = sample_item(2, "Sponge", ItemStatus::InStock);

        let filtered = filter_items(
            &[milk, sponge],
            &ItemCriteria {
                category: Some("7".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].item.name, "Milk");

        // Uncategorized items never match a concrete category id
        let none = filter_items(
            &[sample_item(3, "Soap", ItemStatus::InStock)],
            &ItemCriteria {
                category: Some("7".to_string()),
                ..Default::default()
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_items_search_matches_name_or_description() {
        let items = vec![
            sample_item(1, "Whole Milk", ItemStatus::InStock),
            with_description(
                sample_item(2, "Butter", ItemStatus::InStock),
                "from the MILK aisle",
            ),
            sample_item(3, "Eggs", ItemStatus::InStock),
        ];

        let filtered = filter_items(
            &items,
            &ItemCriteria {
                search: Some("milk".to_string()),
                ..Default::default()
            },
        );
        let names: Vec<_> = filtered.iter().map(|i| i.item.name.as_str()).collect();
        assert_eq!(names, vec!["Whole Milk", "Butter"]);
    }

    #[test]
    fn test_filter_items_criteria_are_conjunctive() {
        let items = vec![
            sample_item(1, "Milk", ItemStatus::InStock),
            sample_item(2, "Milk powder", ItemStatus::Expired),
        ];

        let filtered = filter_items(
            &items,
            &ItemCriteria {
                status: Some("expired".to_string()),
                search: Some("milk".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].item.name, "Milk powder");
    }

    #[test]
    fn test_filter_items_is_pure() {
        let items = vec![sample_item(1, "Milk", ItemStatus::InStock)];
        let before = items.clone();

        let _ = filter_items(
            &items,
            &ItemCriteria {
                search: Some("milk".to_string()),
                ..Default::default()
            },
        );
        let _ = filter_items(&items, &ItemCriteria::default());

        assert_eq!(items, before);
    }
}
