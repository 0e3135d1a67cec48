//! Supporting-system geometry.
//!
//! Fortified and Stronghold systems extend their controller's reach to
//! nearby Exploited or Unoccupied systems. Distances are straight-line, in
//! light years, and need both positions to be known.

use crate::control::ControlState;
use crate::facts::SystemFacts;

/// Reach of a Fortified system, in light years.
pub const FORTIFIED_RADIUS_LY: f64 = 20.0;
/// Reach of a Stronghold system, in light years.
pub const STRONGHOLD_RADIUS_LY: f64 = 30.0;

/// Support radius of a system in `state`, if it supports at all.
pub const fn support_radius(state: ControlState) -> Option<f64> {
    match state {
        ControlState::Stronghold => Some(STRONGHOLD_RADIUS_LY),
        ControlState::Fortified => Some(FORTIFIED_RADIUS_LY),
        ControlState::Exploited | ControlState::Unoccupied => None,
    }
}

/// A supporting system and its distance to the target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupportingSystem {
    pub name: String,
    pub state: ControlState,
    pub distance_ly: f64,
}

/// Distance from `supporting` to `target` if `supporting` supports it.
pub fn support_distance(supporting: &SystemFacts, target: &SystemFacts) -> Option<f64> {
    let controller = supporting.controlling_power?;
    let radius = support_radius(supporting.state)?;
    if !matches!(
        target.state,
        ControlState::Exploited | ControlState::Unoccupied
    ) {
        return None;
    }
    if !target.is_in_range(controller) {
        return None;
    }
    supporting
        .distance_to(target)
        .filter(|distance| *distance <= radius)
}

/// True when `supporting` supports `target`.
pub fn supports(supporting: &SystemFacts, target: &SystemFacts) -> bool {
    support_distance(supporting, target).is_some()
}

/// Candidates that support `target`, nearest first.
///
/// The target itself is never reported as its own supporter.
pub fn supporting_systems<'a, I>(target: &SystemFacts, candidates: I) -> Vec<SupportingSystem>
where
    I: IntoIterator<Item = &'a SystemFacts>,
{
    let mut found: Vec<SupportingSystem> = candidates
        .into_iter()
        .filter(|candidate| !is_same_system(candidate, target))
        .filter_map(|candidate| {
            support_distance(candidate, target).map(|distance_ly| SupportingSystem {
                name: candidate.name.clone(),
                state: candidate.state,
                distance_ly,
            })
        })
        .collect();

    found.sort_by(|a, b| {
        a.distance_ly
            .total_cmp(&b.distance_ly)
            .then_with(|| a.name.cmp(&b.name))
    });
    found
}

fn is_same_system(a: &SystemFacts, b: &SystemFacts) -> bool {
    match (a.address, b.address) {
        (Some(x), Some(y)) => x == y,
        _ => a.name == b.name,
    }
}
