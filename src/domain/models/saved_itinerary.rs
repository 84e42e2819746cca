use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TravelPlan;

/// A travel plan the user chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItinerary {
    id: String,
    saved_at: i64,
    plan: TravelPlan,
}

impl SavedItinerary {
    pub fn new(plan: TravelPlan) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            saved_at: current_timestamp(),
            plan,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn saved_at(&self) -> i64 {
        self.saved_at
    }

    pub fn plan(&self) -> &TravelPlan {
        &self.plan
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
