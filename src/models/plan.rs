//! Budget plans
//!
//! A plan is the ordered set of category allocations for one period. Order is
//! insertion order and is what the budgeting view renders first.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{PersonanceError, PersonanceResult};

/// Planned amount for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub category: String,
    pub amount: Money,
}

/// Ordered category allocations with unique category names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Allocation>", into = "Vec<Allocation>")]
pub struct BudgetPlan {
    allocations: Vec<Allocation>,
}

impl BudgetPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan from `(category, amount)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> PersonanceResult<Self>
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        let mut plan = Self::new();
        for (category, amount) in pairs {
            plan.set(category, amount)?;
        }
        Ok(plan)
    }

    /// Set a category's allocation, replacing any existing amount in place
    pub fn set(&mut self, category: impl Into<String>, amount: Money) -> PersonanceResult<()> {
        let category = category.into();
        let category = category.trim();

        if category.is_empty() {
            return Err(PersonanceError::Validation(
                "Allocation category cannot be empty".into(),
            ));
        }
        if amount.is_negative() {
            return Err(PersonanceError::Validation(format!(
                "Allocation for '{}' cannot be negative: {}",
                category, amount
            )));
        }

        match self.allocations.iter_mut().find(|a| a.category == category) {
            Some(existing) => existing.amount = amount,
            None => self.allocations.push(Allocation {
                category: category.to_string(),
                amount,
            }),
        }
        Ok(())
    }

    /// Remove a category from the plan, returning its amount
    pub fn remove(&mut self, category: &str) -> Option<Money> {
        let index = self
            .allocations
            .iter()
            .position(|a| a.category == category.trim())?;
        Some(self.allocations.remove(index).amount)
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.allocations
            .iter()
            .find(|a| a.category == category)
            .map(|a| a.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Allocation> {
        self.allocations.iter()
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Sum of all allocations, clamped to the cents range
    pub fn total(&self) -> Money {
        self.allocations
            .iter()
            .fold(Money::zero(), |acc, a| acc.saturating_add(a.amount))
    }
}

impl TryFrom<Vec<Allocation>> for BudgetPlan {
    type Error = PersonanceError;

    fn try_from(allocations: Vec<Allocation>) -> Result<Self, Self::Error> {
        Self::from_pairs(allocations.into_iter().map(|a| (a.category, a.amount)))
    }
}

impl From<BudgetPlan> for Vec<Allocation> {
    fn from(plan: BudgetPlan) -> Self {
        plan.allocations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_insertion_order() {
        let mut plan = BudgetPlan::new();
        plan.set("Housing", Money::from_dollars(1200)).unwrap();
        plan.set("Food", Money::from_dollars(600)).unwrap();
        plan.set("Housing", Money::from_dollars(1300)).unwrap();

        let names: Vec<_> = plan.iter().map(|a| a.category.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food"]);
        assert_eq!(plan.get("Housing"), Some(Money::from_dollars(1300)));
        assert_eq!(plan.total(), Money::from_dollars(1900));
    }

    #[test]
    fn test_rejects_negative_and_blank() {
        let mut plan = BudgetPlan::new();
        assert!(plan.set("Food", Money::from_dollars(-1)).is_err());
        assert!(plan.set("   ", Money::from_dollars(1)).is_err());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut plan =
            BudgetPlan::from_pairs([("Food", Money::from_dollars(600))]).unwrap();
        assert_eq!(plan.remove("Food"), Some(Money::from_dollars(600)));
        assert_eq!(plan.remove("Food"), None);
    }

    #[test]
    fn test_serializes_as_list() {
        let plan = BudgetPlan::from_pairs([
            ("Housing", Money::from_dollars(1200)),
            ("Food", Money::from_dollars(600)),
        ])
        .unwrap();

        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(
            json,
            r#"[{"category":"Housing","amount":120000},{"category":"Food","amount":60000}]"#
        );

        let back: BudgetPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);

        let bad = r#"[{"category":"Food","amount":-5}]"#;
        assert!(serde_json::from_str::<BudgetPlan>(bad).is_err());
    }
}
