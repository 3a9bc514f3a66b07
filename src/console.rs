//! Interactive prompts used by the command-line binary.

use std::io::{self, BufRead, Write};

/// Whether a yes/no reply is affirmative. Only a single `y` or `Y` is.
#[must_use]
pub fn is_positive_answer(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}

/// Print `prompt` and read lines until one is non-blank, returning it trimmed.
///
/// # Errors
///
/// Returns [`io::ErrorKind::UnexpectedEof`] if input ends first.
pub fn read_input<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before a value was entered"));
        }

        let line = line.trim();
        if !line.is_empty() {
            return Ok(line.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn only_single_y_is_positive() {
        assert!(is_positive_answer("y"));
        assert!(is_positive_answer("Y\n"));
        assert!(!is_positive_answer("yes"));
        assert!(!is_positive_answer("n"));
        assert!(!is_positive_answer(""));
    }

    #[test]
    fn reprompts_until_non_blank() {
        let mut input = Cursor::new("\n   \nexample.com\n");
        let mut output = Vec::new();

        let value = read_input(&mut input, &mut output, "> ").unwrap();

        assert_eq!(value, "example.com");
        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
    }

    #[test]
    fn eof_is_an_error() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        let err = read_input(&mut input, &mut output, "> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
