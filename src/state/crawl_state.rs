//! Crawl state definitions for the pagination loop
//!
//! The crawl is an explicit value threaded through the loop, so termination
//! and partial progress can be tested without a network.

use crate::HarvestError;
use std::fmt;

/// Why a crawl stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The last page carried no next-page control
    NoNextPage,

    /// The server answered with something other than 200
    HttpStatus(u16),

    /// The request never produced a response
    Transport(String),

    /// A fetched page could not be written to the page store
    Storage(String),
}

impl StopReason {
    /// Returns true when the crawl ran to the natural end of the page chain
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::NoNextPage)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoNextPage => write!(f, "no next page"),
            Self::HttpStatus(code) => write!(f, "request failed with status {}", code),
            Self::Transport(error) => write!(f, "transport error: {}", error),
            Self::Storage(error) => write!(f, "page store error: {}", error),
        }
    }
}

/// Phase of the crawl loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlPhase {
    /// Seed page stored, no request issued yet
    Seeded,

    /// A request for the pending next link is in flight
    Fetching,

    /// Last fetch succeeded and its page was stored
    Continue,

    /// Terminal
    Stopped(StopReason),
}

impl CrawlPhase {
    /// Returns true if this is the terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped(_))
    }

    /// Checks whether the loop may move from this phase to `next`
    ///
    /// | From | Allowed targets |
    /// |------|-----------------|
    /// | Seeded | Fetching, Stopped |
    /// | Fetching | Continue, Stopped |
    /// | Continue | Fetching, Stopped |
    /// | Stopped | (none) |
    pub fn can_transition_to(&self, next: &CrawlPhase) -> bool {
        match (self, next) {
            (Self::Stopped(_), _) => false,
            (_, Self::Stopped(_)) => true,
            (Self::Seeded, Self::Fetching) => true,
            (Self::Fetching, Self::Continue) => true,
            (Self::Continue, Self::Fetching) => true,
            _ => false,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Seeded => "seeded",
            Self::Fetching => "fetching",
            Self::Continue => "continue",
            Self::Stopped(_) => "stopped",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped(reason) => write!(f, "stopped ({})", reason),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// Mutable state of one crawl session
#[derive(Debug, Clone)]
pub struct CrawlState {
    page_number: u32,
    next_link: Option<String>,
    visited: Vec<String>,
    phase: CrawlPhase,
}

impl CrawlState {
    /// Creates the state for a crawl whose seed page (page 1) is already stored
    pub fn seeded(next_link: Option<String>) -> Self {
        Self {
            page_number: 1,
            next_link,
            visited: Vec::new(),
            phase: CrawlPhase::Seeded,
        }
    }

    /// Number of the most recently stored page
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Link that the next fetch will request
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Every link requested so far, in request order
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn phase(&self) -> &CrawlPhase {
        &self.phase
    }

    pub fn is_stopped(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns the stop reason once the crawl is terminal
    pub fn stop_reason(&self) -> Option<&StopReason> {
        match &self.phase {
            CrawlPhase::Stopped(reason) => Some(reason),
            _ => None,
        }
    }

    /// Starts the next fetch
    ///
    /// Takes the pending link, records it as visited and moves to `Fetching`.
    /// With no pending link the crawl stops with [`StopReason::NoNextPage`] and
    /// `None` is returned.
    pub fn begin_fetch(&mut self) -> Result<Option<String>, HarvestError> {
        match self.next_link.take() {
            Some(link) => {
                self.transition(CrawlPhase::Fetching)?;
                self.visited.push(link.clone());
                Ok(Some(link))
            }
            None => {
                self.transition(CrawlPhase::Stopped(StopReason::NoNextPage))?;
                Ok(None)
            }
        }
    }

    /// Records a stored page and the link it points to
    ///
    /// Returns the number assigned to the stored page.
    pub fn record_success(&mut self, next_link: Option<String>) -> Result<u32, HarvestError> {
        self.transition(CrawlPhase::Continue)?;
        self.page_number += 1;
        self.next_link = next_link;
        Ok(self.page_number)
    }

    /// Number the page currently being fetched will receive if it succeeds
    pub fn pending_page_number(&self) -> u32 {
        self.page_number + 1
    }

    /// Moves to the terminal phase
    pub fn stop(&mut self, reason: StopReason) -> Result<(), HarvestError> {
        self.transition(CrawlPhase::Stopped(reason))
    }

    /// Consumes the state, yielding the visited-link trail for the link log
    pub fn into_visited(self) -> Vec<String> {
        self.visited
    }

    fn transition(&mut self, next: CrawlPhase) -> Result<(), HarvestError> {
        if !self.phase.can_transition_to(&next) {
            return Err(HarvestError::InvalidTransition {
                from: self.phase.clone(),
                to: next,
            });
        }
        tracing::trace!("Crawl phase {} -> {}", self.phase, next);
        self.phase = next;
        Ok(())
    }
}
