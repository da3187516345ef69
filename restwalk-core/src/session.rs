//! Transient state of one interactive planning session.
//!
//! A session remembers the last request and its outcome so a front end can
//! show a spinner, the routes, or an error, and offer a manual retry. Each
//! submission discards the previous outcome before the generator is called.
//!
//! Front ends that run the planner elsewhere (a worker thread or an async
//! task) drive the session in two steps: [`PlanningSession::begin`] marks it
//! pending, and [`PlanningSession::complete`] records the outcome.
//! [`PlanningSession::submit`] does both around a blocking plan call.

use log::debug;

use crate::{PlanRequest, RouteCollection, RouteGenerator, RoutePlanner, RoutingError};

/// Outcome of the most recent submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Nothing submitted, or the session was reset.
    #[default]
    Idle,
    /// A plan call is in flight.
    Pending,
    /// The last plan call succeeded.
    Ready(RouteCollection),
    /// The last plan call failed with this user-facing message.
    Failed(String),
}

/// Holds the last request and its outcome.
///
/// # Examples
/// ```
/// use restwalk_core::{GenerationError, PlanRequest, PlanningSession, RouteGenerator, RoutePlanner, SessionState};
/// use serde_json::Value;
///
/// struct Offline;
///
/// impl RouteGenerator for Offline {
///     fn generate(&self, _: &str, _: &Value) -> Result<String, GenerationError> {
///         Err(GenerationError::MissingCredential)
///     }
/// }
///
/// let planner = RoutePlanner::new(Offline);
/// let mut session = PlanningSession::new();
/// session.submit(&planner, PlanRequest::new("Central Pier", "Victoria Park", 1.5)?);
/// assert!(matches!(session.state(), SessionState::Failed(_)));
/// session.reset();
/// assert_eq!(session.state(), &SessionState::Idle);
/// # Ok::<(), restwalk_core::PlanRequestError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlanningSession {
    state: SessionState,
    last_request: Option<PlanRequest>,
}

impl PlanningSession {
    /// Create an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The request most recently submitted, if any.
    #[must_use]
    pub const fn last_request(&self) -> Option<&PlanRequest> {
        self.last_request.as_ref()
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, SessionState::Pending)
    }

    /// Routes from the last successful submission.
    #[must_use]
    pub const fn routes(&self) -> Option<&RouteCollection> {
        match &self.state {
            SessionState::Ready(routes) => Some(routes),
            _ => None,
        }
    }

    /// Mark `request` as in flight, discarding any previous outcome.
    ///
    /// The caller runs the plan and hands the result to
    /// [`complete`](Self::complete).
    pub fn begin(&mut self, request: PlanRequest) -> &SessionState {
        self.state = SessionState::Pending;
        self.last_request = Some(request);
        &self.state
    }

    /// Record the outcome of the submission started by [`begin`](Self::begin).
    ///
    /// An outcome arriving when nothing is pending, for example after
    /// [`reset`](Self::reset), is dropped and the state is left unchanged.
    pub fn complete(&mut self, outcome: Result<RouteCollection, RoutingError>) -> &SessionState {
        if !self.is_pending() {
            debug!("ignoring plan outcome with no submission pending");
            return &self.state;
        }
        self.state = match outcome {
            Ok(routes) => SessionState::Ready(routes),
            Err(err) => SessionState::Failed(err.to_string()),
        };
        &self.state
    }

    /// Plan `request`, replacing any previous outcome.
    pub fn submit<G: RouteGenerator>(
        &mut self,
        planner: &RoutePlanner<G>,
        request: PlanRequest,
    ) -> &SessionState {
        self.begin(request.clone());
        let outcome = planner.plan(&request);
        self.complete(outcome)
    }

    /// Re-submit the last request.
    ///
    /// Returns `None` when nothing has been submitted since the last reset.
    pub fn retry<G: RouteGenerator>(&mut self, planner: &RoutePlanner<G>) -> Option<&SessionState> {
        let request = self.last_request.clone()?;
        Some(self.submit(planner, request))
    }

    /// Forget the last request and outcome.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.last_request = None;
    }
}
