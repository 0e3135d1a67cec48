//! Filters the activity table down to what is usable right now.

use crate::action::{ResolvedAction, StrategicAction};
use crate::activity::{ActivityCatalog, ActivityDefinition};
use crate::error::PowerplayError;
use crate::facts::SystemFacts;
use crate::power::Power;

use super::EligibleActivity;

/// Eligibility queries over a borrowed catalog.
///
/// The engine holds no state of its own; identical inputs always produce
/// identical output.
#[derive(Clone, Copy, Debug)]
pub struct EligibilityEngine<'a> {
    catalog: &'a ActivityCatalog,
}

impl<'a> EligibilityEngine<'a> {
    pub fn new(catalog: &'a ActivityCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a ActivityCatalog {
        self.catalog
    }

    /// Activities usable in `facts` for `action`, in catalog order.
    ///
    /// Entries are kept when they support `action`, their side condition
    /// holds, and (when undermining a system with a stronghold carrier) they
    /// remain usable with the carrier present. An entry whose condition
    /// cannot be evaluated is skipped with a warning.
    pub fn eligible(
        &self,
        facts: &SystemFacts,
        action: StrategicAction,
        acting_power: Power,
    ) -> Vec<EligibleActivity> {
        let carrier_only = action == StrategicAction::Undermine && facts.has_stronghold_carrier;

        self.catalog
            .iter()
            .filter(|def| def.supports(action))
            .filter(|def| self.condition_holds(def, facts, action))
            .filter(|def| {
                let keep = !carrier_only || def.stronghold_carrier;
                if !keep {
                    tracing::debug!("{}: {} unusable with stronghold carrier", facts.name, def.name);
                }
                keep
            })
            .map(|def| render(def, facts, action, acting_power))
            .collect()
    }

    /// Activities for a resolved action; `OutOfRange` yields nothing.
    pub fn eligible_for(
        &self,
        facts: &SystemFacts,
        action: ResolvedAction,
        acting_power: Power,
    ) -> Vec<EligibleActivity> {
        match action.strategic() {
            Some(action) => self.eligible(facts, action, acting_power),
            None => Vec::new(),
        }
    }

    /// Activities for a free-form action label; unknown labels yield nothing.
    pub fn eligible_by_label(
        &self,
        facts: &SystemFacts,
        label: &str,
        acting_power: Power,
    ) -> Vec<EligibleActivity> {
        match StrategicAction::from_label(label) {
            Some(action) => self.eligible(facts, action, acting_power),
            None => {
                tracing::debug!("unrecognised action label {:?}", label);
                Vec::new()
            }
        }
    }

    fn condition_holds(
        &self,
        def: &ActivityDefinition,
        facts: &SystemFacts,
        action: StrategicAction,
    ) -> bool {
        let Some(condition) = &def.condition else {
            return true;
        };
        match condition.evaluate(facts, action) {
            Ok(holds) => holds,
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "{}: skipping {}: {}",
                    facts.name,
                    def.name,
                    err
                );
                false
            }
        }
    }
}

fn render(
    def: &ActivityDefinition,
    facts: &SystemFacts,
    action: StrategicAction,
    acting_power: Power,
) -> EligibleActivity {
    let vulnerable = action == StrategicAction::Undermine
        && facts
            .controlling_power
            .is_some_and(|controller| def.is_vulnerable(controller));

    EligibleActivity {
        name: def.name.clone(),
        category: def.category,
        legal: def.legal,
        details: def.details.render(&facts.name),
        location: def.location.render(&facts.name),
        hand_in: def.hand_in.render(&facts.name),
        notes: def.notes.render(&facts.name),
        bgs_effect: def.bgs_effect.clone(),
        stronghold_carrier: def.stronghold_carrier,
        bonus: def.is_bonus_for(action, acting_power),
        vulnerable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionSet;
    use crate::activity::{Category, Condition};
    use crate::control::ControlState;

    fn catalog() -> ActivityCatalog {
        ActivityCatalog::new(vec![
            ActivityDefinition::new("Bounty Hunting", Category::Combat, ActionSet::all())
                .usable_with_carrier()
                .with_vulnerable([Power::ArchonDelaine])
                .with_condition(Condition::when(
                    StrategicAction::Undermine,
                    Condition::ControlledBy(Power::ArchonDelaine),
                )),
            ActivityDefinition::new(
                "Sell for large profits",
                Category::Hauling,
                ActionSet::REINFORCE,
            )
            .with_location("Station in {system}")
            .with_bonus(StrategicAction::Reinforce, [Power::LiYongRui]),
        ])
    }

    #[test]
    fn bonus_follows_acting_power() {
        let catalog = catalog();
        let engine = EligibilityEngine::new(&catalog);
        let facts =
            SystemFacts::new("Lembava").controlled_by(Power::LiYongRui, ControlState::Fortified);

        let lyr = engine.eligible(&facts, StrategicAction::Reinforce, Power::LiYongRui);
        let sell = lyr.iter().find(|a| a.name == "Sell for large profits").unwrap();
        assert!(sell.bonus);
        assert_eq!(sell.location, "Station in Lembava");

        let grom = engine.eligible(&facts, StrategicAction::Reinforce, Power::YuriGrom);
        assert!(grom.iter().all(|a| !a.bonus));
    }

    #[test]
    fn vulnerable_only_when_undermining_the_controller() {
        let catalog = catalog();
        let engine = EligibilityEngine::new(&catalog);
        let facts = SystemFacts::new("Harma")
            .controlled_by(Power::ArchonDelaine, ControlState::Exploited);

        let undermine = engine.eligible(&facts, StrategicAction::Undermine, Power::LiYongRui);
        assert_eq!(undermine.len(), 1);
        assert!(undermine[0].vulnerable);

        let reinforce = engine.eligible(&facts, StrategicAction::Reinforce, Power::ArchonDelaine);
        assert!(reinforce.iter().all(|a| !a.vulnerable));
    }

    #[test]
    fn out_of_range_and_unknown_labels_are_empty() {
        let catalog = catalog();
        let engine = EligibilityEngine::new(&catalog);
        let facts = SystemFacts::new("Far");

        assert!(engine
            .eligible_for(&facts, ResolvedAction::OutOfRange, Power::LiYongRui)
            .is_empty());
        assert!(engine
            .eligible_by_label(&facts, "Plunder", Power::LiYongRui)
            .is_empty());
        assert_eq!(
            engine.eligible_by_label(&facts, "acquisition", Power::LiYongRui).len(),
            1
        );
    }
}
