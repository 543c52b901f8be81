use chrono::NaiveDate;

/// A requested stay as a half-open date interval `[check_in, check_out)`.
///
/// The night of `check_out` is not part of the stay, so a check-out and a
/// check-in on the same date do not conflict (same-day turnover is allowed).
/// Construction is the only way to obtain one, so `check_in < check_out`
/// holds everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
#[error("check_in {check_in} must be strictly before check_out {check_out}")]
pub struct InvalidStayError {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, InvalidStayError> {
        if check_in < check_out {
            Ok(Self {
                check_in,
                check_out,
            })
        } else {
            Err(InvalidStayError {
                check_in,
                check_out,
            })
        }
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Strict interval intersection test. This is the single conflict
    /// predicate for the whole system; the Postgres store pushes the same
    /// comparisons into SQL.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn stay(check_in: &str, check_out: &str) -> StayRange {
        StayRange::new(date(check_in), date(check_out)).unwrap()
    }

    #[test]
    fn rejects_inverted_and_empty_ranges() {
        assert!(StayRange::new(date("2026-03-10"), date("2026-03-05")).is_err());
        assert!(StayRange::new(date("2026-03-10"), date("2026-03-10")).is_err());
    }

    #[test]
    fn detects_partial_and_contained_overlap() {
        let base = stay("2026-03-10", "2026-03-15");
        assert!(base.overlaps(&stay("2026-03-12", "2026-03-20")));
        assert!(base.overlaps(&stay("2026-03-01", "2026-03-11")));
        assert!(base.overlaps(&stay("2026-03-11", "2026-03-12")));
        assert!(base.overlaps(&stay("2026-03-01", "2026-03-31")));
    }

    #[test]
    fn back_to_back_stays_do_not_conflict() {
        let first = stay("2026-03-10", "2026-03-15");
        let second = stay("2026-03-15", "2026-03-18");
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn disjoint_ranges_do_not_conflict() {
        let first = stay("2026-03-10", "2026-03-12");
        let second = stay("2026-03-20", "2026-03-22");
        assert!(!first.overlaps(&second));
    }

    #[test]
    fn overlap_is_symmetric() {
        let pairs = [
            ("2026-03-10", "2026-03-15", "2026-03-12", "2026-03-20"),
            ("2026-03-10", "2026-03-15", "2026-03-15", "2026-03-18"),
            ("2026-03-10", "2026-03-12", "2026-03-01", "2026-03-31"),
            ("2026-01-01", "2026-01-02", "2026-06-01", "2026-06-02"),
        ];
        for (a1, a2, b1, b2) in pairs {
            let a = stay(a1, a2);
            let b = stay(b1, b2);
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "asymmetric for {a:?} / {b:?}");
        }
    }

    #[test]
    fn nights_counts_the_half_open_length() {
        assert_eq!(stay("2026-03-10", "2026-03-15").nights(), 5);
        assert_eq!(stay("2026-03-10", "2026-03-11").nights(), 1);
    }
}
