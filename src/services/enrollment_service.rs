use tracing::{info, warn};

use crate::database::activity_registry::{ActivityMap, ActivityStore};
use crate::errors::RegistryError;

pub fn list_activities(store: &dyn ActivityStore) -> ActivityMap {
    store.list_all()
}

pub fn signup(
    store: &dyn ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    match store.signup(activity_name, email) {
        Ok(()) => {
            let spots_left = store.get(activity_name).map(|a| a.spots_left());
            info!(activity = %activity_name, email = %email, ?spots_left, "signup accepted");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    store: &dyn ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    match store.unregister(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}
