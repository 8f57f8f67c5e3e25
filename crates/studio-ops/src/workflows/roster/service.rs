use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::availability;
use super::domain::{
    AvailabilityView, TalentId, TalentIntake, TalentProfile, DEFAULT_TALENT_STATUS,
    OFFBOARDED_TALENT_STATUS,
};
use super::repository::{RepositoryError, TalentRepository};
use crate::workflows::casting::{CastMemberVerdict, CastingReport, CastingRequest};

/// Service composing the talent repository and the availability evaluator.
pub struct RosterService<R> {
    repository: Arc<R>,
}

static TALENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_talent_id() -> TalentId {
    let id = TALENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    TalentId(format!("tal-{id:06}"))
}

impl<R> RosterService<R>
where
    R: TalentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Provision a roster entry, returning the stored profile.
    pub fn provision(&self, intake: TalentIntake) -> Result<TalentProfile, RosterServiceError> {
        let display_name = intake.display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(RosterServiceError::MissingDisplayName);
        }

        let profile = TalentProfile {
            talent_id: next_talent_id(),
            display_name,
            craft: intake.craft,
            status: intake
                .status
                .filter(|status| !status.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TALENT_STATUS.to_string()),
            next_available: intake.next_available,
            bookouts: intake.bookouts,
        };

        let stored = self.repository.insert(profile)?;
        Ok(stored)
    }

    /// Offboard talent by overwriting their status. The row stays queryable;
    /// every later evaluation short-circuits to `unavailable`.
    pub fn offboard(&self, talent_id: &TalentId) -> Result<TalentProfile, RosterServiceError> {
        let mut profile = self
            .repository
            .fetch(talent_id)?
            .ok_or(RepositoryError::NotFound)?;

        profile.status = OFFBOARDED_TALENT_STATUS.to_string();
        self.repository.update(profile.clone())?;
        Ok(profile)
    }

    /// Evaluate one talent against a candidate start date. A missing row
    /// still produces a view rather than an error; the verdict carries the
    /// explanation.
    pub fn availability(
        &self,
        talent_id: &TalentId,
        start_date: Option<&str>,
    ) -> Result<AvailabilityView, RosterServiceError> {
        let profile = self.repository.fetch(talent_id)?;
        let verdict = availability::evaluate(profile.as_ref(), start_date);

        let view = match profile {
            Some(profile) => profile.availability_view(verdict),
            None => AvailabilityView::for_missing(talent_id.clone(), verdict),
        };

        Ok(view)
    }

    /// Conflict-check a whole cast against a production's start date.
    pub fn casting_report(
        &self,
        request: CastingRequest,
    ) -> Result<CastingReport, RosterServiceError> {
        let start_date = request.start_date.as_deref();
        let mut members = Vec::with_capacity(request.cast.len());

        for talent_id in &request.cast {
            let profile = self.repository.fetch(talent_id)?;
            let verdict = availability::evaluate(profile.as_ref(), start_date);
            members.push(CastMemberVerdict {
                talent_id: Some(talent_id.clone()),
                display_name: profile
                    .map(|profile| profile.display_name)
                    .unwrap_or_else(|| talent_id.0.clone()),
                verdict,
            });
        }

        Ok(CastingReport::from_members(
            request.production,
            request.start_date,
            members,
        ))
    }

    /// Full roster listing for the scheduling dashboard.
    pub fn roster(&self) -> Result<Vec<TalentProfile>, RosterServiceError> {
        let mut profiles = self.repository.list()?;
        profiles.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Ok(profiles)
    }
}

/// Error raised by the roster service.
#[derive(Debug, thiserror::Error)]
pub enum RosterServiceError {
    #[error("display name must not be blank")]
    MissingDisplayName,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
