use crate::infra::InMemoryTalentRepository;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use studio_ops::error::AppError;
use studio_ops::workflows::casting::{CastMemberSnapshot, CastingRequest};
use studio_ops::workflows::roster::{
    evaluate, RosterImporter, RosterService, TalentCraft, TalentIntake,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Candidate production start date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub(crate) start_date: Option<String>,
    /// Optional roster sheet export (CSV) to hydrate the demo roster.
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Talent status as maintained on the scheduling sheet
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// "Next available" date (YYYY-MM-DD or ISO-8601 timestamp)
    #[arg(long)]
    pub(crate) next_available: Option<String>,
    /// Comma-separated bookout ranges ("<start> to <end>, ...")
    #[arg(long)]
    pub(crate) bookouts: Option<String>,
    /// Candidate production start date
    #[arg(long)]
    pub(crate) start_date: Option<String>,
}

/// One-shot availability check from the command line, for producers
/// triaging a sheet row without spinning up the service.
pub(crate) fn run_roster_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        status,
        next_available,
        bookouts,
        start_date,
    } = args;

    let snapshot = CastMemberSnapshot {
        display_name: "ad-hoc check".to_string(),
        status,
        next_available,
        bookouts,
    };

    let verdict = evaluate(Some(&snapshot), start_date.as_deref());
    println!("{}: {}", verdict.status.label(), verdict.reason);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        start_date,
        roster_csv,
    } = args;

    let start_date =
        start_date.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let repository = Arc::new(InMemoryTalentRepository::default());
    let service = RosterService::new(repository);

    let profiles = match roster_csv {
        Some(path) => {
            println!("Roster source: sheet export {}", path.display());
            let file = std::fs::File::open(&path)?;
            RosterImporter::hydrate(file, &service)?
        }
        None => {
            println!("Roster source: built-in sample roster");
            let mut provisioned = Vec::new();
            for intake in sample_roster() {
                match service.provision(intake) {
                    Ok(profile) => provisioned.push(profile),
                    Err(err) => {
                        println!("  Provisioning failed: {err}");
                        return Ok(());
                    }
                }
            }
            provisioned
        }
    };

    println!("\nAvailability for {start_date}");
    for profile in &profiles {
        let view = match service.availability(&profile.talent_id, Some(&start_date)) {
            Ok(view) => view,
            Err(err) => {
                println!("  Roster unavailable: {err}");
                return Ok(());
            }
        };
        println!(
            "- {} ({}) -> {}: {}",
            profile.display_name,
            profile.craft.label(),
            view.status,
            view.reason
        );
    }

    let report = match service.casting_report(CastingRequest {
        production: "Demo production".to_string(),
        start_date: Some(start_date),
        cast: profiles
            .iter()
            .map(|profile| profile.talent_id.clone())
            .collect(),
    }) {
        Ok(report) => report,
        Err(err) => {
            println!("  Casting report unavailable: {err}");
            return Ok(());
        }
    };

    println!(
        "\nCasting report: {} available / {} unavailable / {} unknown -> clear to book: {}",
        report.tally.available, report.tally.unavailable, report.tally.unknown, report.clear_to_book
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("\nDashboard payload:\n{json}"),
        Err(err) => println!("\nDashboard payload unavailable: {err}"),
    }

    Ok(())
}

fn sample_roster() -> Vec<TalentIntake> {
    vec![
        TalentIntake {
            display_name: "June Vega".to_string(),
            craft: TalentCraft::Narrator,
            status: None,
            next_available: None,
            bookouts: None,
        },
        TalentIntake {
            display_name: "Priya Anand".to_string(),
            craft: TalentCraft::Narrator,
            status: Some("On Hiatus - returns March".to_string()),
            next_available: None,
            bookouts: None,
        },
        TalentIntake {
            display_name: "Marcus Cole".to_string(),
            craft: TalentCraft::AudioEngineer,
            status: None,
            next_available: None,
            bookouts: Some("2026-01-01 to 2026-01-05".to_string()),
        },
        TalentIntake {
            display_name: "Dana Reyes".to_string(),
            craft: TalentCraft::Director,
            status: None,
            next_available: Some("2026-04-01".to_string()),
            bookouts: None,
        },
    ]
}
