//! Eligible activity records and their display grouping.

use crate::activity::Category;

/// An activity usable right now, with text rendered for the target system.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EligibleActivity {
    pub name: String,
    pub category: Category,
    pub legal: bool,
    pub details: String,
    pub location: String,
    pub hand_in: String,
    pub notes: String,
    pub bgs_effect: String,
    pub stronghold_carrier: bool,
    /// The acting power earns a bonus for this activity and action.
    pub bonus: bool,
    /// Undermining, and the controller is vulnerable to this activity.
    pub vulnerable: bool,
}

/// Activities of one category, in the order they were produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryGroup {
    pub category: Category,
    pub activities: Vec<EligibleActivity>,
}

/// Groups activities by category in display order, dropping empty groups.
///
/// Order within a group is preserved.
pub fn group_by_category(activities: Vec<EligibleActivity>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Category::DISPLAY_ORDER
        .iter()
        .map(|&category| CategoryGroup {
            category,
            activities: Vec::new(),
        })
        .collect();

    for activity in activities {
        if let Some(group) = groups.iter_mut().find(|g| g.category == activity.category) {
            group.activities.push(activity);
        }
    }

    groups.retain(|group| !group.activities.is_empty());
    groups
}
