use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// The menu key the player types to pick this level.
    pub fn choice(&self) -> &'static str {
        match self {
            Difficulty::Easy => "1",
            Difficulty::Medium => "2",
            Difficulty::Hard => "3",
        }
    }

    /// Accepts exactly "1", "2" or "3"; anything else is not a choice.
    pub fn from_choice(input: &str) -> Option<Difficulty> {
        match input {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Medium),
            "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn chances(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 5,
            Difficulty::Hard => 3,
        }
    }

    pub fn menu_line(&self) -> String {
        format!("{}. {} ({} chances)", self.choice(), self, self.chances())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}
