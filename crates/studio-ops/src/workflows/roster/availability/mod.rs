mod dates;

use serde::{Deserialize, Serialize};

/// Loose talent shape the evaluator reads. Implementors expose whatever
/// fields they actually have; every accessor is optional so partial rows
/// from the scheduling sheet can be evaluated without an adapter layer.
pub trait TalentAvailability {
    fn status(&self) -> Option<&str>;
    fn next_available_date(&self) -> Option<&str>;
    fn bookouts(&self) -> Option<&str>;
}

/// Coarse availability outcome rendered as a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Unknown,
    Unavailable,
    Available,
}

impl AvailabilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AvailabilityStatus::Unknown => "unknown",
            AvailabilityStatus::Unavailable => "unavailable",
            AvailabilityStatus::Available => "available",
        }
    }
}

/// Availability outcome paired with a human-readable justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityVerdict {
    pub status: AvailabilityStatus,
    pub reason: String,
}

impl AvailabilityVerdict {
    fn unknown(reason: &str) -> Self {
        Self {
            status: AvailabilityStatus::Unknown,
            reason: reason.to_string(),
        }
    }

    fn unavailable(reason: String) -> Self {
        Self {
            status: AvailabilityStatus::Unavailable,
            reason,
        }
    }

    fn open() -> Self {
        Self {
            status: AvailabilityStatus::Available,
            reason: "Open".to_string(),
        }
    }
}

/// Status markers that make talent unbookable regardless of dates.
const UNAVAILABLE_STATUS_MARKERS: [&str; 2] = ["hiatus", "inactive"];

/// Judge whether talent can take a production starting on `start_date`.
///
/// Rules are applied in precedence order and the first hit wins: missing
/// talent, blocking status, missing or invalid start date, "next available"
/// floor, then bookout ranges. Malformed optional fields are skipped rather
/// than failing the evaluation, so the function is total over every input
/// combination.
pub fn evaluate<T>(talent: Option<&T>, start_date: Option<&str>) -> AvailabilityVerdict
where
    T: TalentAvailability + ?Sized,
{
    let Some(talent) = talent else {
        return AvailabilityVerdict::unknown("No Actor");
    };

    if let Some(status) = talent.status() {
        let lowered = status.to_lowercase();
        if UNAVAILABLE_STATUS_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
        {
            return AvailabilityVerdict::unavailable(format!("Status: {status}"));
        }
    }

    let Some(raw_start) = start_date else {
        return AvailabilityVerdict::unknown("Set Start Date");
    };

    let Some(candidate) = dates::parse_date_value(raw_start) else {
        return AvailabilityVerdict::unknown("Invalid Start Date");
    };

    if let Some(next_available) = talent
        .next_available_date()
        .and_then(dates::parse_date_value)
    {
        if candidate < next_available {
            return AvailabilityVerdict::unavailable(format!(
                "Busy until {}",
                dates::format_short(next_available)
            ));
        }
    }

    if let Some(encoded) = talent.bookouts() {
        if let Some(range) = dates::first_containing_range(encoded, candidate) {
            return AvailabilityVerdict::unavailable(format!(
                "Booked out ({} - {})",
                range.start_text, range.end_text
            ));
        }
    }

    AvailabilityVerdict::open()
}
