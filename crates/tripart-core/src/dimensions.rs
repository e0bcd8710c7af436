//! Problem dimensions derived from the group size.
//!
//! For a group size `g` the universe holds `y = 3g + 2` elements. Every pair
//! of elements owns one group, and each group receives `g` triples drawn from
//! the `y - 2` elements the pair leaves behind.

use crate::error::{Result, TripartError};

/// Returns the binomial coefficient `C(n, k)`.
///
/// Returns 0 when `k > n`.
///
/// # Examples
///
/// ```
/// use tripart_core::binomial;
///
/// assert_eq!(binomial(8, 3), 56);
/// assert_eq!(binomial(5, 2), 10);
/// assert_eq!(binomial(2, 3), 0);
/// ```
///
/// # Panics
///
/// Panics if the result does not fit in `usize`; see [`checked_binomial`].
pub fn binomial(n: usize, k: usize) -> usize {
    checked_binomial(n, k).unwrap_or_else(|| panic!("C({}, {}) overflows usize", n, k))
}

/// Returns `C(n, k)`, or `None` if it does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use tripart_core::checked_binomial;
///
/// assert_eq!(checked_binomial(8, 3), Some(56));
/// assert_eq!(checked_binomial(usize::MAX, 3), None);
/// ```
pub fn checked_binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result == C(n, i + 1) after this step
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
        usize::try_from(result).ok()?;
    }
    usize::try_from(result).ok()
}

/// Size parameters of a partition problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    group_size: usize,
    element_count: usize,
}

impl Dimensions {
    /// Creates the standard dimensions `y = 3g + 2` for a group size `g`.
    ///
    /// # Errors
    ///
    /// Returns [`TripartError::InvalidGroupSize`] when `g == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripart_core::Dimensions;
    ///
    /// let dims = Dimensions::for_group_size(2).unwrap();
    /// assert_eq!(dims.element_count(), 8);
    /// assert_eq!(dims.pair_count(), 28);
    /// assert_eq!(dims.triple_count(), 56);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TripartError::InvalidGroupSize`] for `g == 0` and
    /// [`TripartError::GroupSizeTooLarge`] when the triple count of the
    /// universe does not fit in `usize`.
    pub fn for_group_size(group_size: usize) -> Result<Self> {
        if group_size == 0 {
            return Err(TripartError::InvalidGroupSize(group_size));
        }
        let element_count = group_size
            .checked_mul(3)
            .and_then(|n| n.checked_add(2))
            .ok_or(TripartError::GroupSizeTooLarge(group_size))?;
        Self::custom(group_size, element_count)
    }

    /// Creates dimensions with an explicit element count.
    ///
    /// Universes other than `3g + 2` are accepted so that undersized or
    /// oversized instances can be modelled; they are generally infeasible.
    pub fn custom(group_size: usize, element_count: usize) -> Result<Self> {
        if group_size == 0 {
            return Err(TripartError::InvalidGroupSize(group_size));
        }
        if element_count < 2 {
            return Err(TripartError::InvalidElementCount(element_count));
        }
        if checked_binomial(element_count, 3).is_none() {
            return Err(TripartError::GroupSizeTooLarge(group_size));
        }
        Ok(Self {
            group_size,
            element_count,
        })
    }

    /// Number of triples per group (`g`).
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Number of elements in the universe (`y`).
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Returns true if `y = 3g + 2`.
    pub fn is_standard(&self) -> bool {
        self.element_count == 3 * self.group_size + 2
    }

    /// Number of pairs, `C(y, 2)`. Equals the number of groups.
    pub fn pair_count(&self) -> usize {
        binomial(self.element_count, 2)
    }

    /// Number of triples, `C(y, 3)`.
    pub fn triple_count(&self) -> usize {
        binomial(self.element_count, 3)
    }

    /// Number of triples admissible for any single pair, `C(y - 2, 3)`.
    pub fn admissible_per_pair(&self) -> usize {
        binomial(self.element_count - 2, 3)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g={}, y={}", self.group_size, self.element_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_small_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(11, 3), 165);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn test_standard_dimensions() {
        let dims = Dimensions::for_group_size(1).unwrap();
        assert_eq!(dims.element_count(), 5);
        assert_eq!(dims.pair_count(), 10);
        assert_eq!(dims.triple_count(), 10);
        assert_eq!(dims.admissible_per_pair(), 1);
        assert!(dims.is_standard());
    }

    #[test]
    fn test_group_times_pairs_equals_triples() {
        for g in 1..8 {
            let dims = Dimensions::for_group_size(g).unwrap();
            assert_eq!(dims.pair_count() * g, dims.triple_count());
        }
    }

    #[test]
    fn test_zero_group_size_rejected() {
        assert!(matches!(
            Dimensions::for_group_size(0),
            Err(TripartError::InvalidGroupSize(0))
        ));
    }

    #[test]
    fn test_huge_group_size_rejected() {
        assert!(matches!(
            Dimensions::for_group_size(usize::MAX / 2),
            Err(TripartError::GroupSizeTooLarge(_))
        ));
        // 3g + 2 fits, C(y, 3) does not.
        assert!(matches!(
            Dimensions::for_group_size(usize::MAX / 4),
            Err(TripartError::GroupSizeTooLarge(_))
        ));
        assert!(Dimensions::custom(1, usize::MAX).is_err());
    }

    #[test]
    fn test_checked_binomial_limits() {
        assert_eq!(checked_binomial(5, 3), Some(10));
        assert_eq!(checked_binomial(2, 3), Some(0));
        assert_eq!(checked_binomial(usize::MAX, 1), Some(usize::MAX));
        assert_eq!(checked_binomial(usize::MAX, 2), None);
    }

    #[test]
    fn test_custom_dimensions() {
        let dims = Dimensions::custom(2, 5).unwrap();
        assert!(!dims.is_standard());
        assert_eq!(dims.admissible_per_pair(), 1);
        assert!(Dimensions::custom(1, 1).is_err());
    }
}
