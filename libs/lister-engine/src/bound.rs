use std::num::NonZeroUsize;

use crate::error::ListError;

/// Maximum number of records a caller asks for. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bound(NonZeroUsize);

impl Bound {
    /// Validate a caller-supplied bound. Zero and negatives are rejected.
    pub fn new(bound: i64) -> Result<Self, ListError> {
        usize::try_from(bound)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Bound)
            .ok_or(ListError::InvalidArgument { bound })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The smaller of `self` and `ceiling`.
    pub fn clamp_to(self, ceiling: Bound) -> Bound {
        self.min(ceiling)
    }
}

impl From<NonZeroUsize> for Bound {
    fn from(n: NonZeroUsize) -> Self {
        Bound(n)
    }
}

impl TryFrom<i64> for Bound {
    type Error = ListError;

    fn try_from(bound: i64) -> Result<Self, Self::Error> {
        Bound::new(bound)
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negatives() {
        for bad in [0, -1, i64::MIN] {
            let err = Bound::new(bad).unwrap_err();
            assert!(matches!(err, ListError::InvalidArgument { bound } if bound == bad));
        }
    }

    #[test]
    fn accepts_positive() {
        assert_eq!(Bound::new(1).unwrap().get(), 1);
        assert_eq!(Bound::new(5).unwrap().get(), 5);
    }

    #[test]
    fn clamp_picks_smaller() {
        let five = Bound::new(5).unwrap();
        let fifty = Bound::new(50).unwrap();
        assert_eq!(fifty.clamp_to(five), five);
        assert_eq!(five.clamp_to(fifty), five);
    }
}
