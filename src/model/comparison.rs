use std::cmp::Ordering;

/// Where a guess sits relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Lower,
    Higher,
    Equal,
}

impl Comparison {
    pub fn of(guess: i64, target: i64) -> Comparison {
        match guess.cmp(&target) {
            Ordering::Less => Comparison::Lower,
            Ordering::Greater => Comparison::Higher,
            Ordering::Equal => Comparison::Equal,
        }
    }

    /// Player-facing feedback for a miss; `None` for a match.
    pub fn feedback(&self) -> Option<&'static str> {
        match self {
            Comparison::Lower => Some("Too low! Try again."),
            Comparison::Higher => Some("Too high! Try again."),
            Comparison::Equal => None,
        }
    }
}

pub fn compare(guess: i64, target: i64) -> Comparison {
    Comparison::of(guess, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_over_full_range() {
        for target in 1..=100 {
            for guess in 1..=100 {
                let expected = if guess < target {
                    Comparison::Lower
                } else if guess > target {
                    Comparison::Higher
                } else {
                    Comparison::Equal
                };
                assert_eq!(compare(guess, target), expected);
            }
        }
    }

    #[test]
    fn test_compare_is_total() {
        assert_eq!(compare(i64::MIN, i64::MAX), Comparison::Lower);
        assert_eq!(compare(i64::MAX, i64::MIN), Comparison::Higher);
        assert_eq!(compare(-3, -3), Comparison::Equal);
    }

    #[test]
    fn test_feedback() {
        assert!(Comparison::Lower.feedback().unwrap().starts_with("Too low!"));
        assert!(Comparison::Higher.feedback().unwrap().starts_with("Too high!"));
        assert_eq!(Comparison::Equal.feedback(), None);
    }
}
