use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintBand {
    MoreThan50,
    MoreThan20,
    MoreThan10,
    TenOrLess,
}

impl HintBand {
    pub fn for_distance(distance: u64) -> HintBand {
        if distance > 50 {
            HintBand::MoreThan50
        } else if distance > 20 {
            HintBand::MoreThan20
        } else if distance > 10 {
            HintBand::MoreThan10
        } else {
            HintBand::TenOrLess
        }
    }

    pub fn between(target: i64, guess: i64) -> HintBand {
        HintBand::for_distance(target.abs_diff(guess))
    }
}

impl fmt::Display for HintBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            HintBand::MoreThan50 => "more than 50",
            HintBand::MoreThan20 => "more than 20",
            HintBand::MoreThan10 => "more than 10",
            HintBand::TenOrLess => "10 or less",
        };
        f.write_str(text)
    }
}

/// Stateless; the caller decides whether a hint may still be given.
pub fn hint(target: i64, last_guess: i64) -> String {
    format!(
        "The distance between the target and your guess is {}!",
        HintBand::between(target, last_guess)
    )
}
