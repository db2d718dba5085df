//! Line-oriented console helpers shared by the interactive components

use std::io::{self, BufRead, Write};

/// Width of the dashed rule under section headers
pub const RULE_WIDTH: usize = 50;

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Read one line without its line terminator. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Print a prompt without a newline and read the answer
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    read_line(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut input = Cursor::new("first\r\nsecond\nlast");

        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("last"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_prompt_writes_message() {
        let mut input = Cursor::new("42\n");
        let mut out = Vec::new();

        let answer = prompt(&mut input, &mut out, "Number: ").unwrap();

        assert_eq!(answer.as_deref(), Some("42"));
        assert_eq!(String::from_utf8(out).unwrap(), "Number: ");
    }
}
