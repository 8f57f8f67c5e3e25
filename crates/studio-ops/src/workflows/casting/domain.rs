use serde::{Deserialize, Serialize};

use crate::workflows::roster::availability::TalentAvailability;
use crate::workflows::roster::domain::TalentId;

/// Conflict-check request resolved against the roster repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastingRequest {
    pub production: String,
    #[serde(default)]
    pub start_date: Option<String>,
    pub cast: Vec<TalentId>,
}

/// Cast sheet with already-fetched availability data, for callers that hold
/// their own roster snapshot (the evaluator never fetches).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastSheet {
    pub production: String,
    #[serde(default)]
    pub start_date: Option<String>,
    pub members: Vec<CastMemberSnapshot>,
}

/// One cast member's availability fields as supplied by the caller. Every
/// field beyond the name is optional; missing data degrades to an `unknown`
/// or `available` verdict per the evaluator's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMemberSnapshot {
    pub display_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub next_available: Option<String>,
    #[serde(default)]
    pub bookouts: Option<String>,
}

impl TalentAvailability for CastMemberSnapshot {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn next_available_date(&self) -> Option<&str> {
        self.next_available.as_deref()
    }

    fn bookouts(&self) -> Option<&str> {
        self.bookouts.as_deref()
    }
}
