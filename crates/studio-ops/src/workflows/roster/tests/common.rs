use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::roster::domain::{TalentCraft, TalentId, TalentIntake, TalentProfile};
use crate::workflows::roster::repository::{RepositoryError, TalentRepository};
use crate::workflows::roster::router::roster_router;
use crate::workflows::roster::service::RosterService;

pub(super) fn profile(suffix: &str) -> TalentProfile {
    TalentProfile {
        talent_id: TalentId(format!("tal-{suffix}")),
        display_name: "June Vega".to_string(),
        craft: TalentCraft::Narrator,
        status: "Active".to_string(),
        next_available: None,
        bookouts: None,
    }
}

pub(super) fn intake(display_name: &str) -> TalentIntake {
    TalentIntake {
        display_name: display_name.to_string(),
        craft: TalentCraft::Narrator,
        status: None,
        next_available: None,
        bookouts: None,
    }
}

pub(super) fn build_service() -> (RosterService<MemoryRoster>, Arc<MemoryRoster>) {
    let repository = Arc::new(MemoryRoster::default());
    let service = RosterService::new(repository.clone());
    (service, repository)
}

pub(super) fn roster_router_with_service(service: RosterService<MemoryRoster>) -> axum::Router {
    roster_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRoster {
    pub(super) records: Arc<Mutex<HashMap<TalentId, TalentProfile>>>,
}

impl TalentRepository for MemoryRoster {
    fn insert(&self, profile: TalentProfile) -> Result<TalentProfile, RepositoryError> {
        let mut guard = self.records.lock().expect("roster mutex poisoned");
        if guard.contains_key(&profile.talent_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(profile.talent_id.clone(), profile.clone());
        Ok(profile)
    }

    fn update(&self, profile: TalentProfile) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("roster mutex poisoned");
        guard.insert(profile.talent_id.clone(), profile);
        Ok(())
    }

    fn fetch(&self, id: &TalentId) -> Result<Option<TalentProfile>, RepositoryError> {
        let guard = self.records.lock().expect("roster mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<TalentProfile>, RepositoryError> {
        let guard = self.records.lock().expect("roster mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct UnavailableRoster;

impl TalentRepository for UnavailableRoster {
    fn insert(&self, _profile: TalentProfile) -> Result<TalentProfile, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _profile: TalentProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &TalentId) -> Result<Option<TalentProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<TalentProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
