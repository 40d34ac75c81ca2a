//! Whitespace-separated token reader over line input.

use std::io::{self, BufRead};

/// Reads tokens across line boundaries, and the remainder of a line on demand.
pub struct Tokens<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Next whitespace-separated token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            if let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
                let token = &rest[start..];
                let len = token.find(char::is_whitespace).unwrap_or(token.len());
                let token = token[..len].to_string();
                self.pos += start + len;
                return Ok(Some(token));
            }
            if !self.read_line()? {
                return Ok(None);
            }
        }
    }

    /// Next token parsed as an integer.
    ///
    /// The outer `Option` is `None` at end of input; the inner `Err` carries
    /// a token that is not an integer.
    pub fn next_int(&mut self) -> io::Result<Option<Result<i64, String>>> {
        Ok(self
            .next_token()?
            .map(|token| token.parse::<i64>().map_err(|_| token)))
    }

    /// The rest of the current line, trimmed. When that is blank the next
    /// line is read instead. `None` at end of input.
    pub fn rest_of_line(&mut self) -> io::Result<Option<String>> {
        let rest = self.line[self.pos..].trim().to_string();
        self.pos = self.line.len();
        if !rest.is_empty() {
            return Ok(Some(rest));
        }
        if !self.read_line()? {
            return Ok(None);
        }
        let next = self.line.trim().to_string();
        self.pos = self.line.len();
        Ok(Some(next))
    }

    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        self.pos = 0;
        Ok(self.reader.read_line(&mut self.line)? > 0)
    }
}
