//! Monotonic request tickets used to discard stale completions
//!
//! Ticket numbers are unique across the process, so a completion that
//! outlives its screen can never match a controller mounted later.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw sequence number
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Issues tickets and remembers which one is current
#[derive(Debug, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    /// Issue a new ticket, invalidating every earlier one
    pub fn issue(&mut self) -> Ticket {
        self.last = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        Ticket(self.last)
    }

    /// Whether `ticket` is the most recently issued one
    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        self.last != 0 && ticket.0 == self.last
    }
}
