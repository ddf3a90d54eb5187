#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Case-insensitive `yes`/`y`/`no`/`n`.
    pub fn parse(input: &str) -> Option<YesNo> {
        match input.trim().to_lowercase().as_str() {
            "yes" | "y" => Some(YesNo::Yes),
            "no" | "n" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn is_yes(&self) -> bool {
        *self == YesNo::Yes
    }
}
