use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::database::seed_activities::SEED_ACTIVITIES;
use crate::errors::RegistryError;
use crate::models::{Activity, NewActivity};

/// Activity name to record, in seed order.
pub type ActivityMap = IndexMap<String, Activity>;

/// Storage seam for the activity registry.
///
/// Handlers only ever see `Arc<dyn ActivityStore>`, so tests can hand the
/// router a fresh registry instead of resetting shared state.
pub trait ActivityStore: Send + Sync {
    /// Snapshot of every activity.
    fn list_all(&self) -> ActivityMap;

    fn get(&self, activity_name: &str) -> Option<Activity>;

    /// Appends `email` to the activity's participants.
    fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError>;

    /// Removes `email` from the activity's participants.
    fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError>;
}

// All writers share one lock, so the membership check and the mutation
// happen atomically across concurrent requests.
#[derive(Debug)]
pub struct InMemoryActivityRegistry {
    activities: RwLock<ActivityMap>,
}

impl InMemoryActivityRegistry {
    pub fn new(seed: &[NewActivity<'_>]) -> Result<Self, RegistryError> {
        let mut activities = ActivityMap::with_capacity(seed.len());
        for input in seed {
            let activity = Activity::new(input)?;
            if activities.contains_key(input.name) {
                return Err(RegistryError::DuplicateActivity {
                    name: input.name.to_string(),
                });
            }
            activities.insert(input.name.to_string(), activity);
        }
        Ok(Self {
            activities: RwLock::new(activities),
        })
    }

    pub fn seeded() -> Result<Self, RegistryError> {
        Self::new(SEED_ACTIVITIES)
    }

    // Mutations never leave the map half-updated, so a poisoned lock is
    // still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, ActivityMap> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ActivityMap> {
        self.activities.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ActivityStore for InMemoryActivityRegistry {
    fn list_all(&self) -> ActivityMap {
        self.read().clone()
    }

    fn get(&self, activity_name: &str) -> Option<Activity> {
        self.read().get(activity_name).cloned()
    }

    fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::NotFound)?;

        if activity.is_enrolled(email) {
            return Err(RegistryError::AlreadyEnrolled);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::NotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::NotEnrolled)?;
        activity.participants.remove(position);
        Ok(())
    }
}
