use std::cell::Cell;
use std::rc::Rc;

/// Numbers outgoing requests so that a response can be dropped when a newer
/// request of the same kind was issued while it was in flight.
///
/// Clones share one counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

impl PartialEq for RequestSequence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latest, &other.latest)
    }
}
