//! Integration scenarios for the casting report built from caller-supplied
//! cast sheets (the pure path used by dashboards that hold their own roster
//! snapshot).

use studio_ops::workflows::casting::{CastMemberSnapshot, CastSheet, CastingReport};

fn member(
    name: &str,
    status: Option<&str>,
    next_available: Option<&str>,
    bookouts: Option<&str>,
) -> CastMemberSnapshot {
    CastMemberSnapshot {
        display_name: name.to_string(),
        status: status.map(str::to_string),
        next_available: next_available.map(str::to_string),
        bookouts: bookouts.map(str::to_string),
    }
}

#[test]
fn mixed_cast_produces_per_member_reasons() {
    let sheet = CastSheet {
        production: "The Lighthouse Keeper".to_string(),
        start_date: Some("2026-03-05".to_string()),
        members: vec![
            member("June Vega", Some("Active"), None, None),
            member("Priya Anand", Some("On Hiatus - returns March"), None, None),
            member(
                "Marcus Cole",
                Some("Active"),
                None,
                Some("2026-03-01 to 2026-03-10"),
            ),
            member("Dana Reyes", Some("Active"), Some("2026-04-01"), None),
        ],
    };

    let report = CastingReport::build(&sheet);

    assert_eq!(report.tally.available, 1);
    assert_eq!(report.tally.unavailable, 3);
    assert_eq!(report.tally.unknown, 0);
    assert!(!report.clear_to_book);

    let reasons: Vec<&str> = report
        .members
        .iter()
        .map(|member| member.verdict.reason.as_str())
        .collect();
    assert_eq!(
        reasons,
        vec![
            "Open",
            "Status: On Hiatus - returns March",
            "Booked out (2026-03-01 - 2026-03-10)",
            "Busy until 4/1/2026",
        ]
    );
}

#[test]
fn report_is_stable_across_rebuilds() {
    let sheet = CastSheet {
        production: "Night Ferry".to_string(),
        start_date: Some("2026-03-05".to_string()),
        members: vec![member("June Vega", Some("Active"), None, None)],
    };

    let first = CastingReport::build(&sheet);
    let second = CastingReport::build(&sheet);
    assert_eq!(first, second);
}

#[test]
fn invalid_start_date_marks_whole_cast_unknown() {
    let sheet = CastSheet {
        production: "Night Ferry".to_string(),
        start_date: Some("TBD".to_string()),
        members: vec![
            member("June Vega", Some("Active"), None, None),
            member("Marcus Cole", Some("Active"), None, None),
        ],
    };

    let report = CastingReport::build(&sheet);
    assert_eq!(report.tally.unknown, 2);
    assert!(report
        .members
        .iter()
        .all(|member| member.verdict.reason == "Invalid Start Date"));
}

#[test]
fn blocking_status_wins_even_with_invalid_start_date() {
    let sheet = CastSheet {
        production: "Night Ferry".to_string(),
        start_date: Some("TBD".to_string()),
        members: vec![member("Priya Anand", Some("inactive"), None, None)],
    };

    let report = CastingReport::build(&sheet);
    assert_eq!(report.members[0].verdict.reason, "Status: inactive");
    assert_eq!(report.tally.unavailable, 1);
}

#[test]
fn report_serializes_for_the_dashboard() {
    let sheet = CastSheet {
        production: "Night Ferry".to_string(),
        start_date: Some("2026-03-05".to_string()),
        members: vec![member("June Vega", Some("Active"), None, None)],
    };

    let report = CastingReport::build(&sheet);
    let payload = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(payload["production"], "Night Ferry");
    assert_eq!(payload["clear_to_book"], true);
    assert_eq!(payload["members"][0]["verdict"]["status"], "available");
}
