//! Request sequencing for page controllers.
//!
//! Every fetch a controller starts gets a strictly increasing sequence
//! number. Only the response for the most recently issued number may touch
//! page state; anything older is stale and dropped.

/// A fetch the caller must issue, carrying the request query it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a ticket does nothing until its request is sent and completed"]
pub struct FetchTicket {
    seq: u64,
    query: String,
}

impl FetchTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Query string for the request, leading `?` included.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FetchSequence {
    latest: u64,
    outstanding: bool,
}

impl FetchSequence {
    pub(crate) fn issue(&mut self, query: String) -> FetchTicket {
        self.latest += 1;
        self.outstanding = true;
        FetchTicket {
            seq: self.latest,
            query,
        }
    }

    /// Marks `ticket` as answered. Returns `false` if a newer ticket has been
    /// issued since, in which case the response must be discarded.
    pub(crate) fn settle(&mut self, ticket: &FetchTicket) -> bool {
        if ticket.seq != self.latest {
            return false;
        }
        self.outstanding = false;
        true
    }

    /// Drops any outstanding request without a response.
    pub(crate) fn cancel(&mut self) {
        self.latest += 1;
        self.outstanding = false;
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.outstanding
    }
}
