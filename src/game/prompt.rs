use std::io::{self, BufRead, Write};

use crate::model::{Difficulty, YesNo, TARGET_RANGE};

/// Line-oriented prompts over any reader/writer pair.
///
/// Every `ask_*` re-prompts until the answer is valid. Only the line
/// terminator is stripped; each parser decides about other whitespace.
/// Closed input surfaces as `io::ErrorKind::UnexpectedEof`.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        // Bytes that are not UTF-8 become replacement characters and fail validation.
        let line = String::from_utf8_lossy(&line);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<T> {
        loop {
            let answer = self.read_answer(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => self.say(invalid)?,
            }
        }
    }

    pub fn ask_difficulty(&mut self) -> io::Result<Difficulty> {
        self.ask(
            "Enter your choice (1, 2, or 3): ",
            "Invalid input. Please enter 1, 2, or 3.",
            Difficulty::from_choice,
        )
    }

    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<YesNo> {
        self.ask(
            &format!("{} (yes/no): ", question),
            "Invalid input. Please enter 'yes' or 'no'.",
            YesNo::parse,
        )
    }

    pub fn ask_guess(&mut self) -> io::Result<u32> {
        self.ask(
            "Enter your guess: ",
            "Invalid input. Please enter a number between 1 and 100.",
            parse_guess,
        )
    }
}

/// An integer inside the target range, nothing else.
pub fn parse_guess(input: &str) -> Option<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|guess| TARGET_RANGE.contains(guess))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output).unwrap()
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("1"), Some(1));
        assert_eq!(parse_guess(" 100 "), Some(100));
        assert_eq!(parse_guess("0"), None);
        assert_eq!(parse_guess("101"), None);
        assert_eq!(parse_guess("-5"), None);
        assert_eq!(parse_guess("5.5"), None);
        assert_eq!(parse_guess("abc"), None);
        assert_eq!(parse_guess(""), None);
    }

    #[test]
    fn test_ask_difficulty_reprompts() {
        let mut console = console("4\nhard\n\n2\n");
        assert_eq!(console.ask_difficulty().unwrap(), Difficulty::Medium);

        let text = output(console);
        assert_eq!(text.matches("Invalid input. Please enter 1, 2, or 3.").count(), 3);
        assert_eq!(text.matches("Enter your choice (1, 2, or 3): ").count(), 4);
    }

    #[test]
    fn test_ask_guess_reprompts() {
        let mut console = console("0\n101\nfifty\n50\n");
        assert_eq!(console.ask_guess().unwrap(), 50);
        assert_eq!(
            output(console)
                .matches("Invalid input. Please enter a number between 1 and 100.")
                .count(),
            3
        );
    }

    #[test]
    fn test_ask_yes_no() {
        let mut console = console("maybe\nY\nno\n");
        assert_eq!(console.ask_yes_no("Do you want a hint?").unwrap(), YesNo::Yes);
        assert_eq!(console.ask_yes_no("Do you want a hint?").unwrap(), YesNo::No);

        let text = output(console);
        assert!(text.contains("Do you want a hint? (yes/no): "));
        assert_eq!(text.matches("Invalid input. Please enter 'yes' or 'no'.").count(), 1);
    }

    #[test]
    fn test_closed_input_is_eof() {
        let mut console = console("");
        let err = console.ask_guess().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_difficulty_with_spaces_is_rejected() {
        let mut console = console(" 2 \n2\n");
        assert_eq!(console.ask_difficulty().unwrap(), Difficulty::Medium);
        assert_eq!(
            output(console)
                .matches("Invalid input. Please enter 1, 2, or 3.")
                .count(),
            1
        );
    }

    #[test]
    fn test_non_utf8_line_reprompts() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"42\n");
        let mut console = Console::new(Cursor::new(input), Vec::new());

        assert_eq!(console.ask_guess().unwrap(), 42);
        assert_eq!(
            output(console)
                .matches("Invalid input. Please enter a number between 1 and 100.")
                .count(),
            1
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = console("7");
        assert_eq!(console.ask_guess().unwrap(), 7);
    }

    #[test]
    fn test_windows_line_endings() {
        let mut console = console("3\r\n");
        assert_eq!(console.ask_difficulty().unwrap(), Difficulty::Hard);
    }
}
