//! Success/failure indicator series derived from lists of package numbers.

use std::collections::HashSet;

use serde::Serialize;

/// A 0/1 success indicator aligned to package numbers.
///
/// `x` runs over `1..=n` and `y[i]` is `0` when package `x[i]` failed, `1`
/// otherwise. Both vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedSeries {
    pub x: Vec<u64>,
    pub y: Vec<u8>,
}

impl DerivedSeries {
    /// A series of `len` packages that all succeeded.
    pub fn all_success(len: usize) -> Self {
        Self {
            x: (1..=len as u64).collect(),
            y: vec![1; len],
        }
    }

    /// Number of packages in the series.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the series covers no packages.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of packages marked as delivered.
    pub fn success_count(&self) -> usize {
        self.y.iter().filter(|&&v| v == 1).count()
    }

    /// Number of packages marked as failed.
    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    /// Fraction of delivered packages, or `None` for an empty series.
    pub fn success_ratio(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.success_count() as f64 / self.len() as f64)
        }
    }
}

/// Derive the indicator series for a list of failed package numbers.
///
/// The range is driven by the largest package number in `failed`, independent
/// of how many packages the elapsed-time series holds. Returns `None` for an
/// empty list.
///
/// # Example
///
/// ```
/// use packet_doctor::data::derive_series;
///
/// let series = derive_series(&[1, 3]).unwrap();
/// assert_eq!(series.x, vec![1, 2, 3]);
/// assert_eq!(series.y, vec![0, 1, 0]);
/// ```
pub fn derive_series(failed: &[u64]) -> Option<DerivedSeries> {
    let max = *failed.iter().max()?;
    let failed: HashSet<u64> = failed.iter().copied().collect();

    let x: Vec<u64> = (1..=max).collect();
    let y = x.iter().map(|n| if failed.contains(n) { 0 } else { 1 }).collect();
    Some(DerivedSeries { x, y })
}

/// Like [`derive_series`], but an empty list yields an all-success series of
/// `len` packages instead of nothing.
pub fn derive_series_or_default(failed: &[u64], len: usize) -> DerivedSeries {
    derive_series(failed).unwrap_or_else(|| DerivedSeries::all_success(len))
}

/// Package numbers in `[1, max(packages)]` that do not appear in `packages`.
///
/// Returns an empty list for empty input.
///
/// # Example
///
/// ```
/// use packet_doctor::data::find_missing_packages;
///
/// assert_eq!(find_missing_packages(&[1, 2, 5]), vec![3, 4]);
/// assert!(find_missing_packages(&[]).is_empty());
/// ```
pub fn find_missing_packages(packages: &[u64]) -> Vec<u64> {
    let Some(&max) = packages.iter().max() else {
        return Vec::new();
    };
    let seen: HashSet<u64> = packages.iter().copied().collect();
    (1..=max).filter(|n| !seen.contains(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_marks_failures() {
        let series = derive_series(&[1, 3]).unwrap();
        assert_eq!(series.x, vec![1, 2, 3]);
        assert_eq!(series.y, vec![0, 1, 0]);
    }

    #[test]
    fn test_derive_unordered_with_duplicates() {
        let series = derive_series(&[4, 2, 4]).unwrap();
        assert_eq!(series.x, vec![1, 2, 3, 4]);
        assert_eq!(series.y, vec![1, 0, 1, 0]);
    }

    #[test]
    fn test_derive_range_follows_max_not_last() {
        let series = derive_series(&[7, 2]).unwrap();
        assert_eq!(series.len(), 7);
        assert_eq!(series.y[6], 0);
        assert_eq!(series.y[1], 0);
    }

    #[test]
    fn test_derive_empty_is_none() {
        assert!(derive_series(&[]).is_none());
    }

    #[test]
    fn test_derive_invariants_hold() {
        let lists: [&[u64]; 4] = [&[1], &[5], &[3, 1, 9], &[2, 2, 2, 8, 6]];
        for list in lists {
            let series = derive_series(list).unwrap();
            let max = *list.iter().max().unwrap();
            assert_eq!(series.x, (1..=max).collect::<Vec<_>>());
            assert_eq!(series.y.len() as u64, max);
            for (i, &y) in series.y.iter().enumerate() {
                let package = i as u64 + 1;
                assert_eq!(y == 0, list.contains(&package), "package {package} in {list:?}");
            }
        }
    }

    #[test]
    fn test_default_when_empty() {
        let series = derive_series_or_default(&[], 4);
        assert_eq!(series.x, vec![1, 2, 3, 4]);
        assert_eq!(series.y, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_default_ignored_when_list_present() {
        let series = derive_series_or_default(&[2, 4], 10);
        assert_eq!(series.x, vec![1, 2, 3, 4]);
        assert_eq!(series.y, vec![1, 0, 1, 0]);
    }

    #[test]
    fn test_counts_and_ratio() {
        let series = derive_series(&[2, 4]).unwrap();
        assert_eq!(series.success_count(), 2);
        assert_eq!(series.failure_count(), 2);
        assert_eq!(series.success_ratio(), Some(0.5));
        assert_eq!(DerivedSeries::all_success(0).success_ratio(), None);
    }

    #[test]
    fn test_find_missing_packages() {
        assert_eq!(find_missing_packages(&[3, 1]), vec![2]);
        assert_eq!(find_missing_packages(&[1, 2, 3]), Vec::<u64>::new());
        assert_eq!(find_missing_packages(&[4]), vec![1, 2, 3]);
        assert!(find_missing_packages(&[]).is_empty());
    }
}
