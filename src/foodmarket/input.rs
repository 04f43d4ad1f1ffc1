use crate::error::TokenError;
use std::collections::VecDeque;
use std::io::BufRead;

/// Reads whitespace-delimited tokens, regardless of how they are split
/// across lines. Bytes that are not valid UTF-8 decode to U+FFFD.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> Result<String, TokenError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = Vec::new();
            if self.inner.read_until(b'\n', &mut line)? == 0 {
                return Err(TokenError::EndOfInput);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }

    pub fn next_int(&mut self) -> Result<i64, TokenError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| TokenError::Malformed {
            expected: "integer",
            token,
        })
    }

    pub fn next_float(&mut self) -> Result<f64, TokenError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| TokenError::Malformed {
            expected: "floating-point number",
            token,
        })
    }
}
