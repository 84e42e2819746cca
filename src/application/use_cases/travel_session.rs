use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{QueryParams, ResultEnvelope, SavedItinerary, TravelPlan};

use super::ResearchTravelUseCase;

/// Returned when a query is submitted while another is still in flight.
pub const BUSY_MESSAGE: &str = "A research request is already in progress.";

#[derive(Default)]
struct SessionState {
    current: Option<TravelPlan>,
    saved: Vec<SavedItinerary>,
    last_params: Option<QueryParams>,
    last_error: Option<String>,
}

/// Front-end state around the research pipeline: the current response slot,
/// the saved itineraries and the single in-flight flag.
///
/// Each submission is independent; only the most recent params are kept.
pub struct TravelSession {
    use_case: Arc<ResearchTravelUseCase>,
    querying: AtomicBool,
    state: Mutex<SessionState>,
}

/// Clears the in-flight flag even if the submitting future is dropped.
struct QueryingGuard<'a>(&'a AtomicBool);

impl Drop for QueryingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl TravelSession {
    pub fn new(use_case: Arc<ResearchTravelUseCase>) -> Self {
        Self {
            use_case,
            querying: AtomicBool::new(false),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Runs a query. A successful plan replaces the current response; a
    /// failure leaves it untouched. Rejected outright while another query runs.
    pub async fn submit(&self, params: QueryParams) -> ResultEnvelope {
        if self.querying.swap(true, Ordering::SeqCst) {
            warn!("Rejecting submission: a query is already in flight");
            return ResultEnvelope::failure(BUSY_MESSAGE);
        }
        let _guard = QueryingGuard(&self.querying);

        self.state.lock().await.last_params = Some(params.clone());

        let envelope = self.use_case.submit_query(&params).await;

        let mut state = self.state.lock().await;
        match &envelope {
            ResultEnvelope::Success { data } => {
                state.current = Some(data.clone());
                state.last_error = None;
            }
            ResultEnvelope::Failure { error } => {
                state.last_error = Some(error.clone());
            }
        }

        envelope
    }

    pub fn is_querying(&self) -> bool {
        self.querying.load(Ordering::SeqCst)
    }

    pub async fn current_response(&self) -> Option<TravelPlan> {
        self.state.lock().await.current.clone()
    }

    pub async fn clear_response(&self) {
        let mut state = self.state.lock().await;
        if state.current.take().is_some() {
            debug!("Cleared current travel response");
        }
    }

    /// Copies the current plan into the saved list. `None` if there is no plan.
    pub async fn save_current_response(&self) -> Option<SavedItinerary> {
        let mut state = self.state.lock().await;
        let plan = state.current.clone()?;
        let saved = SavedItinerary::new(plan);
        state.saved.push(saved.clone());
        info!(
            "Saved itinerary {} ({} saved)",
            saved.id(),
            state.saved.len()
        );
        Some(saved)
    }

    pub async fn saved_itineraries(&self) -> Vec<SavedItinerary> {
        self.state.lock().await.saved.clone()
    }

    pub async fn last_params(&self) -> Option<QueryParams> {
        self.state.lock().await.last_params.clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.lock().await.last_error.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::connector::MockResearchClient;
    use crate::domain::{RawServiceOutput, Region};

    fn session_with(client: MockResearchClient) -> TravelSession {
        TravelSession::new(Arc::new(ResearchTravelUseCase::new(Arc::new(client))))
    }

    fn params() -> QueryParams {
        QueryParams::new("beach day").with_regions([Region::LaRomana])
    }

    #[tokio::test]
    async fn success_fills_current_slot() {
        let session = session_with(MockResearchClient::new());
        assert!(session.current_response().await.is_none());

        let envelope = session.submit(params()).await;

        assert!(envelope.is_success());
        assert_eq!(session.current_response().await.as_ref(), envelope.data());
        assert_eq!(session.last_params().await, Some(params()));
        assert!(!session.is_querying());
    }

    #[tokio::test]
    async fn failure_keeps_previous_plan() {
        let session = session_with(MockResearchClient::new().then_failing("timeout"));
        session.submit(params()).await;
        let before = session.current_response().await;
        assert!(before.is_some());

        let envelope = session.submit(params()).await;

        assert!(!envelope.is_success());
        assert_eq!(session.current_response().await, before);
        assert_eq!(session.last_error().await.as_deref(), envelope.error());
    }

    #[tokio::test]
    async fn save_appends_copies_in_order() {
        let session = session_with(MockResearchClient::replying(RawServiceOutput::complete(
            "Summary: First\nPros:\n- good",
        )));

        assert!(session.save_current_response().await.is_none());

        session.submit(params()).await;
        let first = session.save_current_response().await.unwrap();
        let second = session.save_current_response().await.unwrap();

        session.clear_response().await;
        assert!(session.current_response().await.is_none());

        let saved = session.saved_itineraries().await;
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].id(), first.id());
        assert_eq!(saved[1].id(), second.id());
        assert_eq!(saved[0].plan().summary, "First");
    }

    #[tokio::test]
    async fn concurrent_submission_is_rejected() {
        let session = session_with(MockResearchClient::new().with_delay(Duration::from_millis(50)));

        let (first, second) = tokio::join!(session.submit(params()), session.submit(params()));

        assert!(first.is_success());
        assert_eq!(second.error(), Some(BUSY_MESSAGE));
        assert!(!session.is_querying());
    }
}
