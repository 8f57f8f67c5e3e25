use std::io::Cursor;

use super::common::build_service;
use crate::workflows::roster::domain::TalentCraft;
use crate::workflows::roster::import::{RosterImportError, RosterImporter};

const SHEET: &str = "\
Name,Craft,Status,Next Available,Bookouts
June Vega,Narrator,Active,,
Priya Anand,Narrator,On Hiatus,2026-02-01,
Marcus Cole,Engineer,,,\"2026-01-01 to 2026-01-05, 2026-02-10 to 2026-02-12\"
";

#[test]
fn parses_roster_rows_with_optional_columns() {
    let intakes = RosterImporter::from_reader(Cursor::new(SHEET)).expect("sheet parses");

    assert_eq!(intakes.len(), 3);

    assert_eq!(intakes[0].display_name, "June Vega");
    assert_eq!(intakes[0].craft, TalentCraft::Narrator);
    assert_eq!(intakes[0].status.as_deref(), Some("Active"));
    assert!(intakes[0].next_available.is_none());
    assert!(intakes[0].bookouts.is_none());

    assert_eq!(intakes[1].next_available.as_deref(), Some("2026-02-01"));

    assert_eq!(intakes[2].craft, TalentCraft::AudioEngineer);
    assert!(intakes[2].status.is_none());
    assert_eq!(
        intakes[2].bookouts.as_deref(),
        Some("2026-01-01 to 2026-01-05, 2026-02-10 to 2026-02-12")
    );
}

#[test]
fn unknown_craft_is_reported_with_its_row() {
    let sheet = "Name,Craft,Status,Next Available,Bookouts\nJune Vega,Foley,,,\n";

    match RosterImporter::from_reader(Cursor::new(sheet)) {
        Err(RosterImportError::UnknownCraft { row, value }) => {
            assert_eq!(row, 1);
            assert_eq!(value, "Foley");
        }
        other => panic!("expected unknown craft error, got {other:?}"),
    }
}

#[test]
fn hydrate_provisions_every_row() {
    let (service, repository) = build_service();

    let profiles =
        RosterImporter::hydrate(Cursor::new(SHEET), &service).expect("hydration succeeds");

    assert_eq!(profiles.len(), 3);
    assert_eq!(repository.records.lock().expect("roster mutex").len(), 3);

    // Sheet rows without a status come up as bookable immediately.
    let marcus = profiles
        .iter()
        .find(|profile| profile.display_name == "Marcus Cole")
        .expect("marcus provisioned");
    assert_eq!(marcus.status, "Active");

    let view = service
        .availability(&marcus.talent_id, Some("2026-01-03"))
        .expect("availability evaluates");
    assert_eq!(view.reason, "Booked out (2026-01-01 - 2026-01-05)");
}

#[test]
fn hydrate_surfaces_provisioning_failures() {
    let (service, _) = build_service();
    let sheet = "Name,Craft,Status,Next Available,Bookouts\n   ,Narrator,,,\n";

    match RosterImporter::hydrate(Cursor::new(sheet), &service) {
        Err(RosterImportError::Service(_)) => {}
        other => panic!("expected service error, got {other:?}"),
    }
}
