//! Activity definitions: one row of the activity table.

use crate::action::{ActionSet, StrategicAction};
use crate::activity::{Condition, Template};
use crate::power::Power;

/// Display grouping for activities.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Hauling,
    Mining,
    Combat,
    #[strum(to_string = "On Foot", serialize = "OnFoot")]
    OnFoot,
    Misc,
}

impl Category {
    /// Order in which groups are displayed.
    pub const DISPLAY_ORDER: [Category; 5] = [
        Self::Hauling,
        Self::Mining,
        Self::Combat,
        Self::OnFoot,
        Self::Misc,
    ];
}

/// Powers that earn a bonus from an activity, per action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BonusPowers {
    pub acquire: Vec<Power>,
    pub reinforce: Vec<Power>,
    pub undermine: Vec<Power>,
}

impl BonusPowers {
    pub fn for_action(&self, action: StrategicAction) -> &[Power] {
        match action {
            StrategicAction::Acquire => &self.acquire,
            StrategicAction::Reinforce => &self.reinforce,
            StrategicAction::Undermine => &self.undermine,
        }
    }

    pub fn for_action_mut(&mut self, action: StrategicAction) -> &mut Vec<Power> {
        match action {
            StrategicAction::Acquire => &mut self.acquire,
            StrategicAction::Reinforce => &mut self.reinforce,
            StrategicAction::Undermine => &mut self.undermine,
        }
    }

    pub fn contains(&self, action: StrategicAction, power: Power) -> bool {
        self.for_action(action).contains(&power)
    }
}

/// One in-game activity and the actions it contributes to.
///
/// Names are not unique: direction-specific variants of the same activity
/// share a name and differ in `supports`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityDefinition {
    pub name: String,
    pub category: Category,
    pub supports: ActionSet,
    #[cfg_attr(feature = "serde", serde(default = "legal_by_default"))]
    pub legal: bool,
    /// Still usable for undermining while a stronghold carrier is present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stronghold_carrier: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub details: Template,
    /// Where the activity is picked up or performed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Template,
    /// Where results are handed in, when that differs from `location`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hand_in: Template,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Template,
    /// Effect on the background simulation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bgs_effect: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus: BonusPowers,
    /// Controllers whose systems this activity undermines at a bonus.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vulnerable: Vec<Power>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: Option<Condition>,
}

#[cfg(feature = "serde")]
fn legal_by_default() -> bool {
    true
}

impl ActivityDefinition {
    /// Creates a legal definition with empty text and no condition.
    pub fn new(name: impl Into<String>, category: Category, supports: ActionSet) -> Self {
        Self {
            name: name.into(),
            category,
            supports,
            legal: true,
            stronghold_carrier: false,
            details: Template::default(),
            location: Template::default(),
            hand_in: Template::default(),
            notes: Template::default(),
            bgs_effect: String::new(),
            bonus: BonusPowers::default(),
            vulnerable: Vec::new(),
            condition: None,
        }
    }

    #[must_use]
    pub fn illegal(mut self) -> Self {
        self.legal = false;
        self
    }

    #[must_use]
    pub fn usable_with_carrier(mut self) -> Self {
        self.stronghold_carrier = true;
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<Template>) -> Self {
        self.details = details.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<Template>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_hand_in(mut self, hand_in: impl Into<Template>) -> Self {
        self.hand_in = hand_in.into();
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<Template>) -> Self {
        self.notes = notes.into();
        self
    }

    #[must_use]
    pub fn with_bgs_effect(mut self, effect: impl Into<String>) -> Self {
        self.bgs_effect = effect.into();
        self
    }

    #[must_use]
    pub fn with_bonus(
        mut self,
        action: StrategicAction,
        powers: impl IntoIterator<Item = Power>,
    ) -> Self {
        self.bonus.for_action_mut(action).extend(powers);
        self
    }

    #[must_use]
    pub fn with_vulnerable(mut self, powers: impl IntoIterator<Item = Power>) -> Self {
        self.vulnerable.extend(powers);
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn supports(&self, action: StrategicAction) -> bool {
        self.supports.supports(action)
    }

    /// True for entries that support no action at all.
    pub fn is_disabled(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn is_bonus_for(&self, action: StrategicAction, power: Power) -> bool {
        self.bonus.contains(action, power)
    }

    pub fn is_vulnerable(&self, controller: Power) -> bool {
        self.vulnerable.contains(&controller)
    }
}
