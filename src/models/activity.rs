use serde::Serialize;

use crate::errors::RegistryError;

// One extracurricular activity. The name is the registry key and is not
// repeated inside the serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Borrowed input for building an [`Activity`], mirroring the seed table.
pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: u32,
    pub participants: &'a [&'a str],
}

impl Activity {
    pub fn new(input: &NewActivity<'_>) -> Result<Self, RegistryError> {
        let invalid = |reason: &str| RegistryError::InvalidActivity {
            name: input.name.to_string(),
            reason: reason.to_string(),
        };

        if input.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if input.max_participants == 0 {
            return Err(invalid("max_participants must be positive"));
        }

        let mut participants: Vec<String> = Vec::with_capacity(input.participants.len());
        for email in input.participants {
            if participants.iter().any(|p| p == email) {
                return Err(invalid(&format!("participant {} listed twice", email)));
            }
            participants.push(email.to_string());
        }

        Ok(Self {
            description: input.description.to_string(),
            schedule: input.schedule.to_string(),
            max_participants: input.max_participants,
            participants,
        })
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining capacity. Informational only, signup does not check it.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}
