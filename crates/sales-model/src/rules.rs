//! Missing-value handling rules.

use serde::{Deserialize, Serialize};

/// Fill missing cells of one column with a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFill {
    pub column: String,
    pub value: String,
}

impl ColumnFill {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Reward imputation tied to an amount column.
///
/// Missing rewards become `trunc(amount)`; rewards above
/// `2 * amount` are clamped to `trunc(amount)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRule {
    pub reward_column: String,
    pub amount_column: String,
}

impl RewardRule {
    pub fn new(reward_column: impl Into<String>, amount_column: impl Into<String>) -> Self {
        Self {
            reward_column: reward_column.into(),
            amount_column: amount_column.into(),
        }
    }
}

/// Rules applied by the missing-value step.
///
/// Every rule is skipped when its columns are absent from the frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingValueRules {
    pub fills: Vec<ColumnFill>,
    pub reward: Option<RewardRule>,
    /// Fill any cell still missing after the other rules with this value.
    pub fill_remaining: Option<String>,
}

impl MissingValueRules {
    /// `PaymentType` → `"Unknown"`, `BonusPoints` imputed from `SaleAmount`.
    pub fn standard() -> Self {
        Self {
            fills: vec![ColumnFill::new("PaymentType", "Unknown")],
            reward: Some(RewardRule::new("BonusPoints", "SaleAmount")),
            fill_remaining: None,
        }
    }

    /// No rules at all.
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fill(mut self, fill: ColumnFill) -> Self {
        self.fills.push(fill);
        self
    }

    #[must_use]
    pub fn with_reward(mut self, reward: Option<RewardRule>) -> Self {
        self.reward = reward;
        self
    }

    #[must_use]
    pub fn with_fill_remaining(mut self, value: Option<String>) -> Self {
        self.fill_remaining = value;
        self
    }
}
