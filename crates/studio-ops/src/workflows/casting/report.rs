use serde::{Deserialize, Serialize};

use super::domain::CastSheet;
use crate::workflows::roster::availability::{self, AvailabilityStatus, AvailabilityVerdict};
use crate::workflows::roster::domain::TalentId;

/// Per-member outcome inside a casting report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMemberVerdict {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talent_id: Option<TalentId>,
    pub display_name: String,
    pub verdict: AvailabilityVerdict,
}

/// Verdict counts across the cast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastingTally {
    pub available: usize,
    pub unavailable: usize,
    pub unknown: usize,
}

impl CastingTally {
    fn record(&mut self, status: AvailabilityStatus) {
        match status {
            AvailabilityStatus::Available => self.available += 1,
            AvailabilityStatus::Unavailable => self.unavailable += 1,
            AvailabilityStatus::Unknown => self.unknown += 1,
        }
    }
}

/// Talent-date-conflict summary for one production, rendered on the
/// scheduling dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastingReport {
    pub production: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    pub members: Vec<CastMemberVerdict>,
    pub tally: CastingTally,
    pub clear_to_book: bool,
}

impl CastingReport {
    /// Evaluate a caller-supplied cast sheet. Pure: no fetching, no side
    /// effects, member order preserved.
    pub fn build(sheet: &CastSheet) -> Self {
        let start_date = sheet.start_date.as_deref();
        let members = sheet
            .members
            .iter()
            .map(|member| CastMemberVerdict {
                talent_id: None,
                display_name: member.display_name.clone(),
                verdict: availability::evaluate(Some(member), start_date),
            })
            .collect();

        Self::from_members(sheet.production.clone(), sheet.start_date.clone(), members)
    }

    /// Assemble a report from pre-evaluated members. An empty cast is never
    /// clear to book.
    pub fn from_members(
        production: String,
        start_date: Option<String>,
        members: Vec<CastMemberVerdict>,
    ) -> Self {
        let mut tally = CastingTally::default();
        for member in &members {
            tally.record(member.verdict.status);
        }

        let clear_to_book = !members.is_empty() && tally.available == members.len();

        Self {
            production,
            start_date,
            members,
            tally,
            clear_to_book,
        }
    }
}
