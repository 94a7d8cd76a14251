//! AI assistant panel state.

/// What the assistant panel is showing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AssistantState {
    /// Nothing asked yet; shows the placeholder.
    #[default]
    Idle,
    Loading,
    Answered(String),
    /// One human-readable message, no partial result.
    Failed(String),
}

impl AssistantState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Message shown when the company field is blank.
pub const EMPTY_COMPANY_MESSAGE: &str = "please enter a company name";

/// Trim the company name, rejecting blank input.
pub fn validate_company(input: &str) -> Result<&str, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(EMPTY_COMPANY_MESSAGE)
    } else {
        Ok(trimmed)
    }
}

/// Hands out request tickets so late responses from superseded requests
/// can be dropped. Requests in flight are never aborted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    generation: u64,
}

/// Identifies one request issued by a [`RequestTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTracker {
    /// Start a new request, superseding any earlier one.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket(self.generation)
    }

    /// Whether `ticket` belongs to the most recent request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }
}

/// Panel state plus the tracker that decides which response may land.
///
/// Submitting while a request is in flight supersedes it: the panel stays
/// loading and only the newest request's outcome is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssistantSession {
    state: AssistantState,
    tracker: RequestTracker,
}

impl AssistantSession {
    pub fn state(&self) -> &AssistantState {
        &self.state
    }

    /// Validate `input` and start a request for it. Returns the ticket for
    /// the new request and the trimmed company name.
    pub fn submit(&mut self, input: &str) -> Result<(RequestTicket, String), &'static str> {
        let company = validate_company(input)?.to_string();
        self.state = AssistantState::Loading;
        Ok((self.tracker.begin(), company))
    }

    /// Apply the outcome of the request behind `ticket`. Returns `false`
    /// and leaves the state untouched when a newer request superseded it.
    pub fn finish(&mut self, ticket: RequestTicket, outcome: Result<String, String>) -> bool {
        if !self.tracker.is_current(ticket) {
            return false;
        }
        self.state = match outcome {
            Ok(text) => AssistantState::Answered(text),
            Err(message) => AssistantState::Failed(message),
        };
        true
    }
}
