use serde::{Deserialize, Serialize};

use super::availability::{AvailabilityVerdict, TalentAvailability};

/// Identifier wrapper for roster entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TalentId(pub String);

/// Production crafts the studio schedules against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentCraft {
    Narrator,
    Director,
    AudioEngineer,
    Proofer,
}

impl TalentCraft {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Narrator,
            Self::Director,
            Self::AudioEngineer,
            Self::Proofer,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Narrator => "Narrator",
            Self::Director => "Director",
            Self::AudioEngineer => "Audio Engineer",
            Self::Proofer => "Proofer",
        }
    }
}

/// Roster entry as synced from the studio's scheduling sheet.
///
/// `status` is free text maintained by producers ("Active", "On Hiatus -
/// returns March", ...). `next_available` and `bookouts` keep the sheet's raw
/// string encodings; the availability evaluator parses them defensively at
/// read time rather than rejecting rows at sync time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentProfile {
    pub talent_id: TalentId,
    pub display_name: String,
    pub craft: TalentCraft,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_available: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookouts: Option<String>,
}

impl TalentProfile {
    pub fn availability_view(&self, verdict: AvailabilityVerdict) -> AvailabilityView {
        AvailabilityView {
            talent_id: self.talent_id.clone(),
            display_name: Some(self.display_name.clone()),
            status: verdict.status.label(),
            reason: verdict.reason,
        }
    }
}

impl TalentAvailability for TalentProfile {
    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn next_available_date(&self) -> Option<&str> {
        self.next_available.as_deref()
    }

    fn bookouts(&self) -> Option<&str> {
        self.bookouts.as_deref()
    }
}

/// Provisioning payload for a new roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentIntake {
    pub display_name: String,
    pub craft: TalentCraft,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub next_available: Option<String>,
    #[serde(default)]
    pub bookouts: Option<String>,
}

pub(crate) const DEFAULT_TALENT_STATUS: &str = "Active";
pub(crate) const OFFBOARDED_TALENT_STATUS: &str = "Inactive";

/// Availability payload rendered as a dashboard chip.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityView {
    pub talent_id: TalentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub status: &'static str,
    pub reason: String,
}

impl AvailabilityView {
    /// Chip for a talent id the roster does not know. The verdict machinery
    /// still answers (`unknown` / "No Actor") so the dashboard never needs a
    /// separate failure path.
    pub fn for_missing(talent_id: TalentId, verdict: AvailabilityVerdict) -> Self {
        Self {
            talent_id,
            display_name: None,
            status: verdict.status.label(),
            reason: verdict.reason,
        }
    }
}
