//! Action resolution and control-point scenarios.

use powerplay_core::{
    ActionResolver, ActionSet, ActivityCatalog, ActivityDefinition, Category, ControlState,
    ControlThresholds, EligibilityEngine, Power, ResolvedAction, StrategicAction, SystemFacts,
    ThresholdError,
};

#[test]
fn home_power_reinforces_its_own_system() {
    let resolver = ActionResolver::default();
    let facts = SystemFacts::new("Lembava").controlled_by(Power::LiYongRui, ControlState::Exploited);
    assert_eq!(resolver.resolve(&facts, Power::LiYongRui), ResolvedAction::Reinforce);
}

#[test]
fn unoccupied_in_range_is_acquired_otherwise_out_of_range() {
    let resolver = ActionResolver::default();
    let in_range = SystemFacts::new("Open").with_powers_in_range([Power::LiYongRui]);
    assert_eq!(resolver.resolve(&in_range, Power::LiYongRui), ResolvedAction::Acquire);

    let nobody = SystemFacts::new("Void");
    assert_eq!(resolver.resolve(&nobody, Power::LiYongRui), ResolvedAction::OutOfRange);
}

fn every_action_catalog() -> ActivityCatalog {
    ActivityCatalog::new(vec![
        ActivityDefinition::new("Bounty Hunting", Category::Combat, ActionSet::all()),
        ActivityDefinition::new("Mine Power Commodity", Category::Mining, ActionSet::ACQUIRE),
        ActivityDefinition::new("Collect Salvage", Category::Misc, ActionSet::UNDERMINE),
    ])
}

#[test]
fn out_of_range_offers_no_activities() {
    let catalog = every_action_catalog();
    let engine = EligibilityEngine::new(&catalog);
    let resolver = ActionResolver::default();
    let far = SystemFacts::new("Void").with_powers_in_range([Power::YuriGrom]);

    for action in StrategicAction::ALL {
        assert!(!engine.eligible(&far, action, Power::LiYongRui).is_empty(), "{action}");
    }

    let action = resolver.resolve(&far, Power::LiYongRui);
    assert_eq!(action, ResolvedAction::OutOfRange);
    assert!(engine.eligible_for(&far, action, Power::LiYongRui).is_empty());

    let acquired = engine.eligible_for(&far, ResolvedAction::Acquire, Power::LiYongRui);
    let names: Vec<_> = acquired.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Bounty Hunting", "Mine Power Commodity"]);
}

#[test]
fn control_points_follow_the_configured_table() {
    let thresholds = ControlThresholds {
        fortified: 650_000,
        stronghold: 1_000_000,
        ..ControlThresholds::standard()
    };
    assert_eq!(thresholds.validate(), Ok(()));

    let resolver = ActionResolver::new(thresholds);
    assert_eq!(resolver.control_points_for(ControlState::Fortified, 0.5), 325_000);
    assert_eq!(
        ActionResolver::default().control_points_for(ControlState::Fortified, 0.5),
        175_000
    );
}

#[test]
fn non_increasing_tables_are_rejected() {
    let thresholds = ControlThresholds {
        fortified: 700_000,
        ..ControlThresholds::standard()
    };
    assert!(matches!(
        thresholds.validate(),
        Err(ThresholdError::NotIncreasing { .. })
    ));
}
