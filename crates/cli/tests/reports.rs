//! Subcommand reports over embedded content and a JSON export.

use std::fs;

use powerplay_cli::commands::{activities, status};
use powerplay_cli::{AppContext, CliConfig, OutputFormat, rows};
use powerplay_core::{Category, ControlState, Power, ResolvedAction, StrategicAction};

const ROWS: &str = r#"[
    {
        "StarSystem": "Lembava",
        "SystemAddress": 1,
        "StarPos": [0.0, 0.0, 0.0],
        "ControllingPower": "Li Yong-Rui",
        "PowerplayState": "Fortified",
        "Powers": ["Li Yong-Rui"],
        "PowerplayStateControlProgress": 0.5,
        "PowerplayStateReinforcement": 4000,
        "PowerplayStateUndermining": 1000
    },
    {
        "StarSystem": "Harma",
        "SystemAddress": 2,
        "StarPos": [10.0, 0.0, 0.0],
        "ControllingPower": "Archon Delaine",
        "PowerplayState": "Exploited",
        "Powers": ["Archon Delaine", "Li Yong-Rui"]
    },
    {
        "StarSystem": "Contested",
        "SystemAddress": 3,
        "StarPos": [5.0, 0.0, 0.0],
        "Powers": ["Li Yong-Rui", "Yuri Grom"],
        "PowerplayConflictProgress": [
            {"Power": "Yuri Grom", "ConflictProgress": 0.1},
            {"Power": "Li Yong-Rui", "ConflictProgress": 0.5}
        ]
    },
    {
        "StarSystem": "Faraway",
        "SystemAddress": 4,
        "Powers": ["Zemina Torval"]
    }
]"#;

fn context() -> AppContext {
    AppContext::embedded(OutputFormat::Json).unwrap()
}

fn systems(ctx: &AppContext) -> Vec<powerplay_core::SystemFacts> {
    rows::parse_systems(ROWS, &ctx.config.thresholds).unwrap()
}

#[test]
fn actions_resolve_for_each_row() {
    let ctx = context();
    let systems = systems(&ctx);
    let actions: Vec<_> = systems
        .iter()
        .map(|facts| activities::report(&ctx, facts, None).action)
        .collect();
    assert_eq!(
        actions,
        [
            ResolvedAction::Reinforce,
            ResolvedAction::Undermine,
            ResolvedAction::Acquire,
            ResolvedAction::OutOfRange,
        ]
    );
}

#[test]
fn out_of_range_rows_have_no_groups() {
    let ctx = context();
    let systems = systems(&ctx);
    let report = activities::report(&ctx, &systems[3], None);
    assert!(report.groups.is_empty());
}

#[test]
fn action_override_skips_resolution() {
    let ctx = context();
    let systems = systems(&ctx);
    let report = activities::report(&ctx, &systems[0], Some(StrategicAction::Undermine));
    assert_eq!(report.action, ResolvedAction::Undermine);
    let combat = report
        .groups
        .iter()
        .find(|g| g.category == Category::Combat)
        .unwrap();
    assert!(combat.activities.iter().all(|a| a.name != "Bounty Hunting"));
}

#[test]
fn status_reports_progress_and_standings() {
    let ctx = context();
    let systems = systems(&ctx);

    let lembava = status::report(&ctx, &systems[0]);
    assert_eq!(lembava.progress.state, ControlState::Fortified);
    assert_eq!(lembava.progress.points, 175_000);
    assert_eq!(lembava.progress.net_score, 3_000);

    let contested = status::report(&ctx, &systems[2]);
    assert_eq!(contested.conflict[0].power, Power::LiYongRui);
    assert!(contested.conflict[0].past_conflict_threshold);
}

#[test]
fn reports_serialize_to_json() {
    let ctx = context();
    let systems = systems(&ctx);
    let report = activities::report(&ctx, &systems[0], None);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["action"], "Reinforce");
    assert_eq!(json["system"], "Lembava");
}

#[test]
fn flags_override_environment_and_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "home_power = \"Yuri Grom\"\n").unwrap();

    let env = CliConfig {
        data_dir: Some(dir.path().to_path_buf()),
        home_power: None,
    };
    let ctx = AppContext::load(None, None, OutputFormat::Text, &env).unwrap();
    assert_eq!(ctx.config.home_power, Power::YuriGrom);

    let env = CliConfig {
        data_dir: Some(dir.path().to_path_buf()),
        home_power: Some(Power::AislingDuval),
    };
    let ctx = AppContext::load(None, Some(Power::ZeminaTorval), OutputFormat::Text, &env).unwrap();
    assert_eq!(ctx.config.home_power, Power::ZeminaTorval);
}
