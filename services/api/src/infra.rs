use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use studio_ops::workflows::roster::{
    RepositoryError, TalentId, TalentProfile, TalentRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Roster store backing the service until the hosted backend adapter lands.
#[derive(Default, Clone)]
pub(crate) struct InMemoryTalentRepository {
    records: Arc<Mutex<HashMap<TalentId, TalentProfile>>>,
}

impl TalentRepository for InMemoryTalentRepository {
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
        if guard.contains_key(&profile.talent_id) {
            guard.insert(profile.talent_id.clone(), profile);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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
