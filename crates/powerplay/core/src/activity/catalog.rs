//! Ordered, immutable activity table.

use crate::action::StrategicAction;
use crate::activity::ActivityDefinition;

/// The activity table the eligibility engine filters.
///
/// Constructed once by the caller (usually from embedded content) and passed
/// by reference; there is no global instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActivityCatalog {
    entries: Vec<ActivityDefinition>,
}

impl ActivityCatalog {
    pub fn new(entries: Vec<ActivityDefinition>) -> Self {
        Self { entries }
    }

    /// Every definition, in declaration order.
    pub fn all(&self) -> &[ActivityDefinition] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActivityDefinition> {
        self.entries.iter()
    }

    /// First definition named `name`.
    ///
    /// Direction-specific variants share names; use [`Self::by_name_for`]
    /// to pick the variant for an action.
    pub fn by_name(&self, name: &str) -> Option<&ActivityDefinition> {
        self.entries.iter().find(|def| def.name == name)
    }

    /// First definition named `name` that supports `action`.
    pub fn by_name_for(&self, name: &str, action: StrategicAction) -> Option<&ActivityDefinition> {
        self.entries
            .iter()
            .find(|def| def.name == name && def.supports(action))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ActivityDefinition> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = ActivityDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ActivityCatalog {
    type Item = &'a ActivityDefinition;
    type IntoIter = std::slice::Iter<'a, ActivityDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionSet;
    use crate::activity::Category;

    fn sample() -> ActivityCatalog {
        [
            ActivityDefinition::new("Sell for large profits", Category::Hauling, ActionSet::ACQUIRE),
            ActivityDefinition::new("Sell for large profits", Category::Hauling, ActionSet::REINFORCE),
            ActivityDefinition::new("Power Kills", Category::Combat, ActionSet::UNDERMINE).illegal(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn by_name_returns_first_declared_match() {
        let catalog = sample();
        let first = catalog.by_name("Sell for large profits").unwrap();
        assert_eq!(first.supports, ActionSet::ACQUIRE);
        assert!(catalog.by_name("Mining").is_none());
    }

    #[test]
    fn by_name_for_disambiguates_by_action() {
        let catalog = sample();
        let reinforce = catalog
            .by_name_for("Sell for large profits", StrategicAction::Reinforce)
            .unwrap();
        assert_eq!(reinforce.supports, ActionSet::REINFORCE);
        assert!(catalog
            .by_name_for("Sell for large profits", StrategicAction::Undermine)
            .is_none());
    }

    #[test]
    fn preserves_declaration_order() {
        let catalog = sample();
        let names: Vec<_> = catalog.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            ["Sell for large profits", "Sell for large profits", "Power Kills"]
        );
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert!(ActivityCatalog::default().is_empty());
    }
}
