//! Reward entries and the reward table.

use crate::error::StoreError;
use crate::ids::RewardId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What a reward grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    /// A percentage off a future purchase. Informational only.
    PercentDiscount,
    /// Credit added to the bonus balance.
    CurrencyCredit,
}

impl RewardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKind::PercentDiscount => "percent_discount",
            RewardKind::CurrencyCredit => "currency_credit",
        }
    }
}

/// One slice of the bonus wheel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardEntry {
    pub id: RewardId,
    /// Label shown on the wheel.
    pub label: String,
    pub kind: RewardKind,
    /// Percent for discounts, amount in the smallest currency unit for credits.
    pub value: u64,
}

impl RewardEntry {
    pub fn new(id: u32, label: impl Into<String>, kind: RewardKind, value: u64) -> Self {
        Self {
            id: RewardId::new(id),
            label: label.into(),
            kind,
            value,
        }
    }

    /// A percentage discount.
    pub fn discount(id: u32, percent: u64) -> Self {
        Self::new(id, format!("{}% off", percent), RewardKind::PercentDiscount, percent)
    }

    /// A bonus balance credit.
    pub fn credit(id: u32, amount: u64) -> Self {
        Self::new(id, format!("+{} bonus", amount), RewardKind::CurrencyCredit, amount)
    }

    /// Credit this entry adds to the bonus balance.
    pub fn credit_amount(&self) -> u64 {
        match self.kind {
            RewardKind::CurrencyCredit => self.value,
            RewardKind::PercentDiscount => 0,
        }
    }

    fn validate(&self) -> Result<(), StoreError> {
        let id = self.id.get();
        if self.label.trim().is_empty() {
            return Err(StoreError::invalid_reward(id, "label is empty"));
        }
        if self.value == 0 {
            return Err(StoreError::invalid_reward(id, "value must be positive"));
        }
        if self.kind == RewardKind::PercentDiscount && self.value > 100 {
            return Err(StoreError::invalid_reward(
                id,
                format!("discount {}% exceeds 100%", self.value),
            ));
        }
        Ok(())
    }
}

/// The fixed, ordered list of wheel rewards.
///
/// Never empty: construction rejects an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RewardTable {
    entries: Vec<RewardEntry>,
}

impl RewardTable {
    /// Build a table, rejecting empty lists, duplicate ids and bad values.
    pub fn new(entries: Vec<RewardEntry>) -> Result<Self, StoreError> {
        if entries.is_empty() {
            return Err(StoreError::EmptyRewardTable);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.id) {
                return Err(StoreError::DuplicateReward(entry.id.get()));
            }
        }
        tracing::debug!(rewards = entries.len(), "reward table loaded");
        Ok(Self { entries })
    }

    /// Parse a JSON array of reward entries.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let entries: Vec<RewardEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[RewardEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&RewardEntry> {
        self.entries.get(index)
    }

    /// Number of entries; always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RewardTable {
    /// Four discounts and four credits.
    fn default() -> Self {
        Self {
            entries: vec![
                RewardEntry::discount(1, 5),
                RewardEntry::credit(2, 50),
                RewardEntry::discount(3, 10),
                RewardEntry::credit(4, 100),
                RewardEntry::discount(5, 15),
                RewardEntry::credit(6, 250),
                RewardEntry::discount(7, 25),
                RewardEntry::credit(8, 500),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for RewardTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<RewardEntry>::deserialize(deserializer)?;
        RewardTable::new(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = RewardTable::default();
        assert_eq!(table.len(), 8);
        assert!(RewardTable::new(table.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            RewardTable::new(Vec::new()),
            Err(StoreError::EmptyRewardTable)
        ));
        assert!(matches!(
            RewardTable::from_json("[]"),
            Err(StoreError::EmptyRewardTable)
        ));
    }

    #[test]
    fn test_duplicate_reward_rejected() {
        let entries = vec![RewardEntry::credit(1, 50), RewardEntry::discount(1, 10)];
        assert!(matches!(
            RewardTable::new(entries),
            Err(StoreError::DuplicateReward(1))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(RewardTable::new(vec![RewardEntry::credit(1, 0)]).is_err());
        assert!(RewardTable::new(vec![RewardEntry::discount(1, 150)]).is_err());
        assert!(RewardTable::new(vec![RewardEntry::new(
            1,
            " ",
            RewardKind::CurrencyCredit,
            10
        )])
        .is_err());
    }

    #[test]
    fn test_credit_amount() {
        assert_eq!(RewardEntry::credit(1, 250).credit_amount(), 250);
        assert_eq!(RewardEntry::discount(2, 25).credit_amount(), 0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 1, "label": "10% off", "kind": "percent_discount", "value": 10},
            {"id": 2, "label": "+100", "kind": "currency_credit", "value": 100}
        ]"#;
        let table = RewardTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).unwrap().kind, RewardKind::CurrencyCredit);
    }

    #[test]
    fn test_deserialize_validates() {
        let err = serde_json::from_str::<RewardTable>("[]").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
