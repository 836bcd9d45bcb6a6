//! Chain ranking tiers.
//!
//! - [`Priority`] - Integer priority of a chain, higher ranks first
//! - [`ChainTiers`] - Immutable chain → priority table with an unknown-chain sentinel

use std::collections::HashMap;
use std::fmt;

use super::error::DomainError;
use super::id::Chain;

/// Baseline unknown-chain priority. The effective sentinel is this value or
/// one below the lowest configured tier, whichever is smaller.
pub const UNKNOWN_PRIORITY_BASELINE: i32 = -99;

/// Ranking priority of a chain. Higher values rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(i32);

impl Priority {
    /// Create a priority from its raw value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw priority value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable table mapping chains to ranking priorities.
///
/// Chains absent from the table resolve to [`ChainTiers::unknown`], a
/// sentinel strictly lower than every configured tier (negative tiers
/// included). Built once from configuration and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTiers {
    tiers: HashMap<Chain, Priority>,
    unknown: Priority,
}

impl ChainTiers {
    /// Build a tier table, validating that the sentinel fits below every tier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TierAtFloor`] if any tier equals `i32::MIN`.
    pub fn try_new<C, I>(table: I) -> Result<Self, DomainError>
    where
        C: Into<Chain>,
        I: IntoIterator<Item = (C, i32)>,
    {
        let mut tiers = HashMap::new();
        for (chain, value) in table {
            let chain = chain.into();
            if value == i32::MIN {
                return Err(DomainError::TierAtFloor {
                    chain: chain.as_str().to_string(),
                    value,
                });
            }
            tiers.insert(chain, Priority::new(value));
        }
        Ok(Self::from_validated(tiers))
    }

    /// The stock tier table: Osmosis, Ethereum, Arbitrum, Zilliqa and Neo.
    #[must_use]
    pub fn standard() -> Self {
        let tiers = default_tier_table()
            .into_iter()
            .map(|(chain, value)| (Chain::from(chain), Priority::new(value)))
            .collect();
        Self::from_validated(tiers)
    }

    fn from_validated(tiers: HashMap<Chain, Priority>) -> Self {
        let lowest = tiers
            .values()
            .map(|p| p.value())
            .min()
            .unwrap_or(UNKNOWN_PRIORITY_BASELINE);
        // lowest > i32::MIN is guaranteed by the constructors.
        let unknown = UNKNOWN_PRIORITY_BASELINE.min(lowest - 1);
        Self {
            tiers,
            unknown: Priority::new(unknown),
        }
    }

    /// Configured priority for `chain`, if any.
    #[must_use]
    pub fn get(&self, chain: &str) -> Option<Priority> {
        self.tiers.get(chain).copied()
    }

    /// Priority for `chain`, falling back to the unknown sentinel.
    #[must_use]
    pub fn priority(&self, chain: &str) -> Priority {
        self.get(chain).unwrap_or(self.unknown)
    }

    /// Whether `chain` has a configured tier.
    #[must_use]
    pub fn is_known(&self, chain: &str) -> bool {
        self.tiers.contains_key(chain)
    }

    /// The unknown-chain sentinel priority.
    #[must_use]
    pub const fn unknown(&self) -> Priority {
        self.unknown
    }

    /// Number of configured chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Whether no chains are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Configured tiers, highest priority first, then by chain name.
    #[must_use]
    pub fn entries(&self) -> Vec<(&Chain, Priority)> {
        let mut entries: Vec<_> = self.tiers.iter().map(|(c, p)| (c, *p)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl Default for ChainTiers {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stock chain tier values, used when configuration supplies none.
#[must_use]
pub fn default_tier_table() -> Vec<(&'static str, i32)> {
    vec![
        ("Osmosis", 100),
        ("Ethereum", 50),
        ("Arbitrum", 30),
        ("Zilliqa", 20),
        ("Neo", 20),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_priorities() {
        let tiers = ChainTiers::standard();
        assert_eq!(tiers.get("Osmosis"), Some(Priority::new(100)));
        assert_eq!(tiers.get("Neo"), Some(Priority::new(20)));
        assert_eq!(tiers.len(), 5);
    }

    #[test]
    fn unknown_chain_gets_sentinel() {
        let tiers = ChainTiers::standard();
        assert_eq!(tiers.priority("Solana"), tiers.unknown());
        assert_eq!(tiers.unknown(), Priority::new(-99));
        assert!(!tiers.is_known("Solana"));
    }

    #[test]
    fn sentinel_stays_below_negative_tiers() {
        let tiers = ChainTiers::try_new([("Deep", -500), ("Shallow", -1)]).unwrap();
        assert_eq!(tiers.unknown(), Priority::new(-501));
        assert!(tiers.unknown() < tiers.priority("Deep"));
    }

    #[test]
    fn sentinel_baseline_when_tiers_are_high() {
        let tiers = ChainTiers::try_new([("A", 5)]).unwrap();
        assert_eq!(tiers.unknown(), Priority::new(UNKNOWN_PRIORITY_BASELINE));
    }

    #[test]
    fn tier_of_minus_99_pushes_sentinel_lower() {
        let tiers = ChainTiers::try_new([("Edge", -99)]).unwrap();
        assert_eq!(tiers.unknown(), Priority::new(-100));
    }

    #[test]
    fn empty_table_uses_baseline() {
        let tiers = ChainTiers::try_new(Vec::<(String, i32)>::new()).unwrap();
        assert!(tiers.is_empty());
        assert_eq!(tiers.unknown(), Priority::new(UNKNOWN_PRIORITY_BASELINE));
    }

    #[test]
    fn rejects_tier_at_integer_floor() {
        let result = ChainTiers::try_new([("Floor", i32::MIN)]);
        assert_eq!(
            result,
            Err(DomainError::TierAtFloor {
                chain: "Floor".to_string(),
                value: i32::MIN,
            })
        );
    }

    #[test]
    fn entries_sorted_by_priority_then_name() {
        let tiers = ChainTiers::standard();
        let names: Vec<&str> = tiers.entries().iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["Osmosis", "Ethereum", "Arbitrum", "Neo", "Zilliqa"]);
    }
}
