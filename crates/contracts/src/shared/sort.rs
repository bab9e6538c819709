use serde::{Deserialize, Serialize};

/// Sortable columns of the order list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Customer,
    Date,
    Amount,
}

impl SortKey {
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Customer => "customer",
            SortKey::Date => "date",
            SortKey::Amount => "amount",
        }
    }

    /// Column header caption
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "Order ID",
            SortKey::Customer => "Customer",
            SortKey::Date => "Date",
            SortKey::Amount => "Amount",
        }
    }

    pub fn all() -> [SortKey; 4] {
        [SortKey::Id, SortKey::Customer, SortKey::Date, SortKey::Amount]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction. Only one column is sorted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click: re-clicking the active key flips the direction,
    /// any other key starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(SortKey::Date, SortDirection::Descending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_key_twice_restores_direction() {
        let start = SortConfig::new(SortKey::Customer, SortDirection::Ascending);
        let once = start.toggled(SortKey::Customer);
        assert_eq!(once.direction, SortDirection::Descending);
        assert_eq!(once.toggled(SortKey::Customer), start);

        let start = SortConfig::default();
        assert_eq!(start.toggled(SortKey::Date).toggled(SortKey::Date), start);
    }

    #[test]
    fn test_new_key_starts_ascending() {
        for from in SortKey::all() {
            for to in SortKey::all().into_iter().filter(|k| *k != from) {
                for direction in [SortDirection::Ascending, SortDirection::Descending] {
                    let next = SortConfig::new(from, direction).toggled(to);
                    assert_eq!(next, SortConfig::new(to, SortDirection::Ascending));
                }
            }
        }
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(serde_json::to_string(&SortKey::Amount).unwrap(), "\"amount\"");
        assert_eq!(
            serde_json::to_string(&SortDirection::Descending).unwrap(),
            "\"desc\""
        );
    }
}
