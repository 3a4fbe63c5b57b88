/// Inspection state definitions for tracking pipeline progress
///
/// This module defines every state one inspection moves through, and the
/// edges allowed between them. There is no retry edge: every failure state is
/// terminal.
use std::fmt;

/// Represents the current state of one inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InspectionState {
    // ===== Active States =====
    /// Nothing has happened yet
    Start,

    /// The primary fetch (and the concurrent TLS probe) is in flight
    Fetching,

    /// The page was fetched successfully
    Fetched,

    /// Structure, performance, SEO and security analysis is running
    Analyzing,

    /// The summarization request has been sent
    Summarizing,

    // ===== Terminal States =====
    /// The report is complete
    Done,

    /// The primary fetch failed
    FetchFailed,

    /// The summarization call failed
    SummarizeFailed,
}

impl InspectionState {
    /// Returns true if no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::FetchFailed | Self::SummarizeFailed)
    }

    /// Returns true if this terminal state produced no report
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::SummarizeFailed)
    }

    /// Returns true if `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: InspectionState) -> bool {
        use InspectionState::*;

        matches!(
            (self, next),
            (Start, Fetching)
                | (Fetching, Fetched)
                | (Fetching, FetchFailed)
                | (Fetched, Analyzing)
                | (Analyzing, Summarizing)
                | (Summarizing, Done)
                | (Summarizing, SummarizeFailed)
        )
    }

    /// Returns a short lowercase name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Fetching => "fetching",
            Self::Fetched => "fetched",
            Self::Analyzing => "analyzing",
            Self::Summarizing => "summarizing",
            Self::Done => "done",
            Self::FetchFailed => "fetch_failed",
            Self::SummarizeFailed => "summarize_failed",
        }
    }

    /// Returns all possible inspection states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Start,
            Self::Fetching,
            Self::Fetched,
            Self::Analyzing,
            Self::Summarizing,
            Self::Done,
            Self::FetchFailed,
            Self::SummarizeFailed,
        ]
    }
}

impl fmt::Display for InspectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
