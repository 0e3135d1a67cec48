//! Text and JSON rendering of command results.

use anyhow::Result;
use console::style;
use powerplay_core::{
    CategoryGroup, ConflictStanding, ControlProgress, ControlState, EligibleActivity, Power,
    ResolvedAction, SupportingSystem,
};
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable report as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_system_header(name: &str, state: ControlState, action: ResolvedAction) {
    println!(
        "{} {} ({})",
        style(name).bold().cyan(),
        style(action).bold().yellow(),
        state
    );
}

/// Prints grouped activities with bonus and vulnerability badges.
pub fn print_groups(groups: &[CategoryGroup], home_power: Power) {
    if groups.is_empty() {
        println!("  {}", style("No activities available").dim());
        return;
    }
    for group in groups {
        println!("  {}", style(group.category).bold().underlined());
        for activity in &group.activities {
            print_activity(activity, home_power);
        }
    }
}

fn print_activity(activity: &EligibleActivity, home_power: Power) {
    let mut line = format!("    {}", style(&activity.name).bold());
    if activity.bonus {
        let badge = format!("★ {} Bonus", home_power.short_code());
        line.push_str(&format!(" {}", style(badge).green()));
    }
    if activity.vulnerable {
        line.push_str(&format!(" {}", style("⚠ Vulnerable").red()));
    }
    if !activity.legal {
        line.push_str(&format!(" {}", style("(illegal)").magenta()));
    }
    println!("{}", line);

    for (label, text) in [
        ("Details", &activity.details),
        ("Location", &activity.location),
        ("Hand in", &activity.hand_in),
        ("Notes", &activity.notes),
    ] {
        if !text.is_empty() {
            println!("      {} {}", style(format!("{label}:")).dim(), text);
        }
    }
}

pub fn print_progress(progress: &ControlProgress) {
    let next = progress
        .next_state
        .map(|state| state.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "  {} {:.1}% ({} / {} CP, next: {})",
        style("Progress:").bold(),
        progress.progress * 100.0,
        progress.points,
        progress.threshold,
        next
    );
    println!(
        "  {} {:+}",
        style("Net score:").bold(),
        progress.net_score
    );
}

pub fn print_standings(standings: &[ConflictStanding], conflict_threshold: u64) {
    if standings.is_empty() {
        return;
    }
    println!("  {}", style("Conflict:").bold());
    for standing in standings {
        let marker = if standing.past_conflict_threshold {
            style("✓").green()
        } else {
            style("·").dim()
        };
        println!(
            "    {} {:<22} {:>6.1}% {:>7} CP (threshold {})",
            marker,
            standing.power.to_string(),
            standing.progress * 100.0,
            standing.points,
            conflict_threshold
        );
    }
}

pub fn print_supporting(target: &str, supporting: &[SupportingSystem]) {
    println!("{} {}", style("Supporting systems for").bold(), style(target).bold().cyan());
    if supporting.is_empty() {
        println!("  {}", style("None in range").dim());
        return;
    }
    for system in supporting {
        println!(
            "  {:<24} {:<10} {:>6.2} ly",
            system.name,
            system.state.to_string(),
            system.distance_ly
        );
    }
}
