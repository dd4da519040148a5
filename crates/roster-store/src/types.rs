//! Activity record types.

use serde::{Deserialize, Serialize};

/// One extracurricular offering.
///
/// The activity name is the roster map key and is not stored in the
/// record itself, so the serialized form carries exactly the fields the
/// activities listing exposes per entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Enrolled emails in signup order. Unique within one activity.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with no participants.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Create an activity with an initial participant list.
    pub fn with_participants(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    /// Whether the activity has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Whether the email is already enrolled.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Seats still open.
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}
