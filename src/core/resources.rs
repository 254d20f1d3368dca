//! Player resources.
//!
//! [`Resources`] is used both for the player's holdings and for the bundles
//! that templates author (costs, effects, rewards). Costs are magnitudes to
//! subtract; effects and rewards are deltas to add.
//!
//! ## State Values (i64 only)
//!
//! Counters are `i64` so that negative deltas can be expressed in effects.
//! Holdings never go negative through a validated spend; the only path that
//! drives a counter to zero is movement energy, which the game-over check
//! catches.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A named resource counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Energy,
    Money,
    Materials,
    Reputation,
    /// Spent to place drafted tiles.
    Workers,
}

impl Resource {
    /// All resources in display order.
    pub fn all() -> impl Iterator<Item = Resource> {
        Resource::iter()
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Resource::Energy => "Energy",
            Resource::Money => "Money",
            Resource::Materials => "Materials",
            Resource::Reputation => "Reputation",
            Resource::Workers => "Workers",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A bundle of resource counters.
///
/// ## Example
///
/// ```
/// use tile_explorer::core::{Resource, Resources};
///
/// let mut wallet = Resources::default().with(Resource::Money, 10);
/// let cost = Resources::default().with(Resource::Money, 4);
///
/// assert!(wallet.can_afford(&cost));
/// wallet.spend(&cost);
/// assert_eq!(wallet.money, 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub energy: i64,
    pub money: i64,
    pub materials: i64,
    pub reputation: i64,
    pub workers: i64,
}

impl Resources {
    /// Set one counter (builder pattern).
    #[must_use]
    pub fn with(mut self, resource: Resource, amount: i64) -> Self {
        *self.get_mut(resource) = amount;
        self
    }

    /// Read one counter.
    #[must_use]
    pub const fn get(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Energy => self.energy,
            Resource::Money => self.money,
            Resource::Materials => self.materials,
            Resource::Reputation => self.reputation,
            Resource::Workers => self.workers,
        }
    }

    /// Mutable access to one counter.
    pub fn get_mut(&mut self, resource: Resource) -> &mut i64 {
        match resource {
            Resource::Energy => &mut self.energy,
            Resource::Money => &mut self.money,
            Resource::Materials => &mut self.materials,
            Resource::Reputation => &mut self.reputation,
            Resource::Workers => &mut self.workers,
        }
    }

    /// Non-zero counters in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Resource, i64)> + '_ {
        Resource::all()
            .map(|r| (r, self.get(r)))
            .filter(|(_, amount)| *amount != 0)
    }

    /// Are all counters zero?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Can these holdings pay `cost`? Only positive cost entries are checked.
    #[must_use]
    pub fn can_afford(&self, cost: &Resources) -> bool {
        cost.entries()
            .all(|(r, amount)| amount <= 0 || self.get(r) >= amount)
    }

    /// Shortfall per resource for `cost`. Empty when affordable.
    #[must_use]
    pub fn missing(&self, cost: &Resources) -> Resources {
        cost.entries().fold(Resources::default(), |missing, (r, amount)| {
            let have = self.get(r);
            if amount > have {
                missing.with(r, amount - have)
            } else {
                missing
            }
        })
    }

    /// Subtract every positive entry of `cost`.
    ///
    /// Callers check [`can_afford`](Self::can_afford) first.
    pub fn spend(&mut self, cost: &Resources) {
        debug_assert!(self.can_afford(cost), "spend without affordability check");
        for (r, amount) in cost.entries() {
            if amount > 0 {
                *self.get_mut(r) -= amount;
            }
        }
    }

    /// Add every entry of `delta`.
    pub fn gain(&mut self, delta: &Resources) {
        for (r, amount) in delta.entries() {
            *self.get_mut(r) += amount;
        }
    }

    /// Resources with a positive amount in this bundle.
    pub fn positive_kinds(&self) -> impl Iterator<Item = Resource> + '_ {
        self.entries().filter(|(_, a)| *a > 0).map(|(r, _)| r)
    }

    /// Every counter negated.
    #[must_use]
    pub fn negated(&self) -> Resources {
        Resource::all().fold(Resources::default(), |acc, r| acc.with(r, -self.get(r)))
    }

    /// Sum of two bundles.
    #[must_use]
    pub fn plus(&self, other: &Resources) -> Resources {
        let mut sum = *self;
        sum.gain(other);
        sum
    }
}

impl std::fmt::Display for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (r, amount) in self.entries() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{amount:+} {r}")?;
        }
        if first {
            f.write_str("nothing")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_and_get() {
        let bundle = Resources::default()
            .with(Resource::Money, 5)
            .with(Resource::Workers, 2);

        assert_eq!(bundle.get(Resource::Money), 5);
        assert_eq!(bundle.get(Resource::Workers), 2);
        assert_eq!(bundle.get(Resource::Energy), 0);
        assert!(!bundle.is_empty());
        assert!(Resources::default().is_empty());
    }

    #[test]
    fn test_can_afford_ignores_zero_entries() {
        let wallet = Resources::default().with(Resource::Money, 3);

        assert!(wallet.can_afford(&Resources::default()));
        assert!(wallet.can_afford(&Resources::default().with(Resource::Money, 3)));
        assert!(!wallet.can_afford(&Resources::default().with(Resource::Money, 4)));
        assert!(!wallet.can_afford(&Resources::default().with(Resource::Materials, 1)));
    }

    #[test]
    fn test_spend_and_gain() {
        let mut wallet = Resources::default()
            .with(Resource::Money, 10)
            .with(Resource::Energy, 5);

        wallet.spend(&Resources::default().with(Resource::Money, 4));
        wallet.gain(&Resources::default().with(Resource::Energy, 2).with(Resource::Reputation, 1));

        assert_eq!(wallet.money, 6);
        assert_eq!(wallet.energy, 7);
        assert_eq!(wallet.reputation, 1);
    }

    #[test]
    fn test_missing() {
        let wallet = Resources::default().with(Resource::Money, 3).with(Resource::Materials, 5);
        let cost = Resources::default().with(Resource::Money, 5).with(Resource::Materials, 2);

        let missing = wallet.missing(&cost);
        assert_eq!(missing, Resources::default().with(Resource::Money, 2));
        assert!(wallet.missing(&Resources::default()).is_empty());
    }

    #[test]
    fn test_positive_kinds() {
        let cost = Resources::default()
            .with(Resource::Money, 2)
            .with(Resource::Energy, -1)
            .with(Resource::Reputation, 1);

        let kinds: Vec<_> = cost.positive_kinds().collect();
        assert_eq!(kinds, vec![Resource::Money, Resource::Reputation]);
    }

    #[test]
    fn test_negated_and_plus() {
        let cost = Resources::default().with(Resource::Money, 5);
        let effect = Resources::default().with(Resource::Reputation, 2);

        let net = cost.negated().plus(&effect);
        assert_eq!(net.money, -5);
        assert_eq!(net.reputation, 2);
    }

    #[test]
    fn test_display() {
        let delta = Resources::default().with(Resource::Money, -5).with(Resource::Energy, 2);
        assert_eq!(delta.to_string(), "+2 Energy, -5 Money");
        assert_eq!(Resources::default().to_string(), "nothing");
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let parsed: Resources = serde_json::from_str(r#"{"money": 4}"#).unwrap();
        assert_eq!(parsed, Resources::default().with(Resource::Money, 4));
    }
}
