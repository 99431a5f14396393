//! Sample unit under test for the eztest demo suites
//!
//! `Ledger` keeps its history private; suites inspect it through the explicit
//! [`Ledger::internals`] accessor instead of reaching into the struct.

/// Running balance that remembers the last `capacity` amounts applied
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: i64,
    history: Vec<i64>,
    capacity: usize,
}

/// Read-only view of a ledger's private state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerInternals<'a> {
    pub history: &'a [i64],
    pub capacity: usize,
}

impl Ledger {
    pub fn new(capacity: usize) -> Self {
        Self {
            balance: 0,
            history: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add `amount` to the balance; the oldest remembered amount is dropped
    /// once the history is full
    pub fn apply(&mut self, amount: i64) {
        self.balance += amount;
        if self.capacity == 0 {
            return;
        }
        if self.history.len() == self.capacity {
            self.history.remove(0);
        }
        self.history.push(amount);
    }

    /// Revert the most recent remembered amount
    pub fn undo(&mut self) -> Option<i64> {
        let amount = self.history.pop()?;
        self.balance -= amount;
        Some(amount)
    }

    pub fn internals(&self) -> LedgerInternals<'_> {
        LedgerInternals {
            history: &self.history,
            capacity: self.capacity,
        }
    }
}

/// Little-endian bytes of `value`
pub fn encode_le(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// XOR of all bytes
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, b| acc ^ b)
}
