//! Explicit rounding direction for integer division.

/// Direction in which an inexact integer division is resolved.
///
/// Every division in the pool names its direction, and the direction is
/// always the one that favours the pool: amounts paid out round down,
/// amounts the pool keeps round up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Towards positive infinity (ceiling).
    Up,
    /// Towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_up() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Down.is_up());
    }
}
