//! List View Utilities
//!
//! Pure helpers deriving display order and summary stats from the item list.

use crate::models::{Item, PackingStats, SortKey};

/// Items in display order for the given sort key.
///
/// Returns a sorted copy; the stored list keeps insertion order. All sorts
/// are stable, so ties preserve their original relative order.
pub fn sorted_view(items: &[Item], key: SortKey) -> Vec<Item> {
    let mut sorted: Vec<Item> = items.to_vec();
    match key {
        SortKey::Input => {}
        // Case-insensitive, close enough to locale ordering for list entries
        SortKey::Description => sorted.sort_by(|a, b| {
            a.description
                .to_lowercase()
                .cmp(&b.description.to_lowercase())
        }),
        SortKey::Packed => sorted.sort_by_key(|item| item.packed),
        SortKey::Quantity => sorted.sort_by_key(|item| item.quantity),
    }
    sorted
}

/// Summary stats over the current list
pub fn packing_stats(items: &[Item]) -> PackingStats {
    if items.is_empty() {
        return PackingStats::Empty;
    }
    let total = items.len();
    let packed = items.iter().filter(|item| item.packed).count();
    // Round up: 1 of 3 packed reads as 34%
    let percent = (packed * 100).div_ceil(total) as u32;
    PackingStats::Progress {
        total,
        packed,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, description: &str, quantity: u8, packed: bool) -> Item {
        Item {
            id,
            description: description.to_string(),
            quantity,
            packed,
        }
    }

    #[test]
    fn test_input_order_is_stored_order() {
        let items = vec![
            make_item(1, "Passport", 1, false),
            make_item(2, "Socks", 5, true),
        ];
        let view = sorted_view(&items, SortKey::Input);
        assert_eq!(view, items);
    }

    #[test]
    fn test_description_sort_is_stable() {
        let items = vec![
            make_item(1, "B", 1, false),
            make_item(2, "A", 1, false),
            make_item(3, "A", 1, false),
        ];
        let view = sorted_view(&items, SortKey::Description);
        // Both "A" items keep their relative order
        let ids: Vec<u32> = view.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_description_sort_ignores_case() {
        let items = vec![
            make_item(1, "charger", 1, false),
            make_item(2, "Adapter", 1, false),
        ];
        let view = sorted_view(&items, SortKey::Description);
        let ids: Vec<u32> = view.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_packed_sort_puts_unpacked_first() {
        let items = vec![
            make_item(1, "Hat", 1, true),
            make_item(2, "Shirt", 2, false),
            make_item(3, "Shoes", 1, true),
        ];
        let view = sorted_view(&items, SortKey::Packed);
        let ids: Vec<u32> = view.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_quantity_sort_ascending() {
        let items = vec![
            make_item(1, "Socks", 5, false),
            make_item(2, "Passport", 1, false),
            make_item(3, "Shirts", 3, false),
        ];
        let view = sorted_view(&items, SortKey::Quantity);
        let ids: Vec<u32> = view.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sorted_view_does_not_mutate_input() {
        let items = vec![
            make_item(1, "B", 2, false),
            make_item(2, "A", 1, false),
        ];
        let _ = sorted_view(&items, SortKey::Description);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].id, 2);
    }

    #[test]
    fn test_stats_empty_list_is_sentinel() {
        assert_eq!(packing_stats(&[]), PackingStats::Empty);
    }

    #[test]
    fn test_stats_percentage_rounds_up() {
        let items = vec![
            make_item(1, "Hat", 1, true),
            make_item(2, "Shirt", 1, false),
            make_item(3, "Shoes", 1, false),
        ];
        assert_eq!(
            packing_stats(&items),
            PackingStats::Progress {
                total: 3,
                packed: 1,
                percent: 34,
            }
        );
    }

    #[test]
    fn test_stats_all_packed_is_full_percent() {
        let items = vec![
            make_item(1, "Hat", 1, true),
            make_item(2, "Shirt", 1, true),
        ];
        assert_eq!(
            packing_stats(&items),
            PackingStats::Progress {
                total: 2,
                packed: 2,
                percent: 100,
            }
        );
    }

    #[test]
    fn test_stats_none_packed_is_zero_percent() {
        let items = vec![make_item(1, "Hat", 1, false)];
        assert_eq!(
            packing_stats(&items),
            PackingStats::Progress {
                total: 1,
                packed: 0,
                percent: 0,
            }
        );
    }
}
