//! In-memory activity roster storage.

use crate::error::RosterError;
use crate::types::Activity;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// In-memory roster of activities keyed by name.
///
/// Cloning is cheap and clones share the same underlying roster, so the
/// handle can be stored in HTTP state and passed around freely. Each
/// mutation runs its precondition checks and the write under a single
/// write-lock acquisition, so concurrent signups cannot overrun an
/// activity's capacity.
#[derive(Clone)]
pub struct RosterStore {
    activities: Arc<RwLock<HashMap<String, Activity>>>,
}

impl RosterStore {
    /// Create a store over the given activity map.
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        info!("Roster store initialized ({} activities)", activities.len());

        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Create a store seeded with the school's starting roster.
    pub fn with_default_roster() -> Self {
        Self::new(default_roster())
    }

    /// Snapshot of the full roster.
    pub async fn snapshot(&self) -> HashMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Get a single activity by name.
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    /// Sign an email up for an activity.
    ///
    /// Checked in order: the activity must exist, the email must not
    /// already be enrolled, and the activity must have a seat left.
    /// Returns the updated activity record.
    #[instrument(skip(self))]
    pub async fn signup(&self, name: &str, email: &str) -> Result<Activity, RosterError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_string()))?;

        if activity.has_participant(email) {
            return Err(RosterError::AlreadyRegistered {
                email: email.to_string(),
                activity: name.to_string(),
            });
        }

        if activity.is_full() {
            return Err(RosterError::ActivityFull {
                activity: name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());

        debug!(
            "Signed up {} for {} ({}/{})",
            email,
            name,
            activity.participants.len(),
            activity.max_participants
        );

        Ok(activity.clone())
    }

    /// Remove an email from an activity's participant list.
    ///
    /// Returns the updated activity record.
    #[instrument(skip(self))]
    pub async fn unregister(&self, name: &str, email: &str) -> Result<Activity, RosterError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::NotRegistered {
                email: email.to_string(),
                activity: name.to_string(),
            })?;

        activity.participants.remove(position);

        debug!(
            "Removed {} from {} ({}/{})",
            email,
            name,
            activity.participants.len(),
            activity.max_participants
        );

        Ok(activity.clone())
    }

    /// Number of activities in the roster.
    pub async fn activity_count(&self) -> usize {
        self.activities.read().await.len()
    }

    /// Total enrollments across all activities.
    pub async fn participant_count(&self) -> usize {
        self.activities
            .read()
            .await
            .values()
            .map(|a| a.participants.len())
            .sum()
    }
}

/// The roster the school starts each term with.
pub fn default_roster() -> HashMap<String, Activity> {
    HashMap::from([
        (
            "Chess Club".to_string(),
            Activity::with_participants(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            ),
        ),
        (
            "Programming Class".to_string(),
            Activity::with_participants(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                vec![
                    "emma@mergington.edu".to_string(),
                    "sophia@mergington.edu".to_string(),
                ],
            ),
        ),
        (
            "Gym Class".to_string(),
            Activity::with_participants(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                vec![
                    "john@mergington.edu".to_string(),
                    "olivia@mergington.edu".to_string(),
                ],
            ),
        ),
    ])
}
