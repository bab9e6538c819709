/// Sort indicators for list column headers
use contracts::shared::sort::{SortConfig, SortDirection, SortKey};

/// Получить индикатор сортировки для заголовка
pub fn sort_indicator(sort: &SortConfig, key: SortKey) -> &'static str {
    if sort.key != key {
        return " ⇅";
    }
    match sort.direction {
        SortDirection::Ascending => " ▲",
        SortDirection::Descending => " ▼",
    }
}

/// CSS class of the indicator; the active column is highlighted
pub fn sort_class(sort: &SortConfig, key: SortKey) -> &'static str {
    if sort.key == key {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortConfig::new(SortKey::Amount, SortDirection::Ascending);
        assert_eq!(sort_indicator(&sort, SortKey::Amount), " ▲");
        assert_eq!(sort_indicator(&sort, SortKey::Date), " ⇅");
        assert_eq!(sort_indicator(&sort.toggled(SortKey::Amount), SortKey::Amount), " ▼");
    }

    #[test]
    fn test_sort_class() {
        let sort = SortConfig::default();
        assert!(sort_class(&sort, SortKey::Date).ends_with("--active"));
        assert_eq!(sort_class(&sort, SortKey::Id), "table__sort-indicator");
    }
}
