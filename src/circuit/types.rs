//! Core types for circuit representation.

use std::fmt;
use std::ops::Not;

/// A stable handle to a variable in the [`VariableStore`](super::VariableStore).
///
/// Slots 0, 1 and 2 always hold the reserved signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub usize);

impl VarId {
    /// The constant-false signal `0`.
    pub const FALSE: VarId = VarId(0);
    /// The constant-true signal `1`.
    pub const TRUE: VarId = VarId(1);
    /// The don't-care signal `_`.
    pub const DONT_CARE: VarId = VarId(2);

    /// Number of reserved slots at the start of every store.
    pub const RESERVED: usize = 3;

    /// Check if this is one of the reserved signals.
    pub fn is_reserved(&self) -> bool {
        self.0 < Self::RESERVED
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

/// A tri-state signal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Signal {
    Low,
    High,
    /// Not yet determined for the current row
    #[default]
    Unknown,
}

impl Signal {
    /// The boolean value, or `None` when unknown.
    pub fn to_bool(self) -> Option<bool> {
        match self {
            Signal::Low => Some(false),
            Signal::High => Some(true),
            Signal::Unknown => None,
        }
    }

    /// Check if the value is defined.
    pub fn is_known(self) -> bool {
        self != Signal::Unknown
    }

    /// Apply a boolean function to two signals, propagating unknowns.
    pub fn combine(self, other: Signal, f: impl FnOnce(bool, bool) -> bool) -> Signal {
        match (self.to_bool(), other.to_bool()) {
            (Some(a), Some(b)) => f(a, b).into(),
            _ => Signal::Unknown,
        }
    }
}

impl From<bool> for Signal {
    fn from(value: bool) -> Self {
        if value {
            Signal::High
        } else {
            Signal::Low
        }
    }
}

impl Not for Signal {
    type Output = Signal;

    fn not(self) -> Signal {
        match self {
            Signal::Low => Signal::High,
            Signal::High => Signal::Low,
            Signal::Unknown => Signal::Unknown,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Low => write!(f, "0"),
            Signal::High => write!(f, "1"),
            Signal::Unknown => write!(f, "X"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_ids() {
        assert!(VarId::FALSE.is_reserved());
        assert!(VarId::DONT_CARE.is_reserved());
        assert!(!VarId(3).is_reserved());
    }

    #[test]
    fn test_signal_not() {
        assert_eq!(!Signal::Low, Signal::High);
        assert_eq!(!Signal::High, Signal::Low);
        assert_eq!(!Signal::Unknown, Signal::Unknown);
    }

    #[test]
    fn test_signal_combine_propagates_unknown() {
        let and = |a, b| a && b;
        assert_eq!(Signal::High.combine(Signal::High, and), Signal::High);
        assert_eq!(Signal::Low.combine(Signal::Unknown, and), Signal::Unknown);
        assert_eq!(Signal::Unknown.combine(Signal::High, and), Signal::Unknown);
    }

    #[test]
    fn test_signal_display() {
        assert_eq!(Signal::Low.to_string(), "0");
        assert_eq!(Signal::High.to_string(), "1");
        assert_eq!(Signal::Unknown.to_string(), "X");
        assert_eq!(Signal::default(), Signal::Unknown);
    }
}
