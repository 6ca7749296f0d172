use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out increasing tickets; only the most recently issued one is current.
///
/// Used to drop responses that complete after a newer request was issued
/// against the same render target.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_latest_wins() {
        let sequence = RequestSequence::new();

        let older = sequence.issue();
        assert!(sequence.is_current(older));

        let newer = sequence.issue();
        assert!(!sequence.is_current(older));
        assert!(sequence.is_current(newer));
    }

    #[test]
    fn test_tickets_increase() {
        let sequence = RequestSequence::new();
        let tickets: Vec<Ticket> = (0..3).map(|_| sequence.issue()).collect();

        assert_ne!(tickets[0], tickets[1]);
        assert!(sequence.is_current(tickets[2]));
        assert!(!tickets[..2].iter().any(|ticket| sequence.is_current(*ticket)));
    }
}
