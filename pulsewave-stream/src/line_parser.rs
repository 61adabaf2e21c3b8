// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reassembly of newline-delimited text from arbitrarily split byte chunks.

/// Splits a byte stream into lines, carrying the unterminated tail across calls.
///
/// Splitting happens on raw bytes, so a multi-byte UTF-8 character cut in half by a
/// chunk boundary is reassembled before the line is decoded. Each complete line is
/// decoded lossily; the `\n` terminator is removed, anything else (including `\r`) is
/// kept for the reading parser to trim.
///
/// ```
/// use pulsewave_stream::StreamLineParser;
///
/// let mut parser = StreamLineParser::new();
/// assert!(parser.feed(b"51").is_empty());
/// assert_eq!(parser.feed(b"2\n530\n"), vec!["512", "530"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct StreamLineParser {
    pending: Vec<u8>,
}

impl StreamLineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` and return every line it completed, in order.
    ///
    /// An empty chunk is a no-op.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        if chunk.is_empty() {
            return Vec::new();
        }

        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.pending[start..].iter().position(|&b| b == b'\n') {
            let end = start + offset;
            lines.push(String::from_utf8_lossy(&self.pending[start..end]).into_owned());
            start = end + 1;
        }

        self.pending.drain(..start);
        lines
    }

    /// Take the unterminated fragment, if any, leaving the parser empty.
    pub fn flush(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let fragment = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        Some(fragment)
    }

    /// Bytes buffered while waiting for a terminator.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::StreamLineParser;

    #[test]
    fn splits_multibyte_character_across_chunks() {
        let bytes = "數值\n".as_bytes();
        let mut parser = StreamLineParser::new();

        assert!(parser.feed(&bytes[..2]).is_empty());
        assert_eq!(parser.feed(&bytes[2..]), vec!["數值"]);
        assert_eq!(parser.pending_len(), 0);
    }

    #[test]
    fn keeps_empty_lines() {
        let mut parser = StreamLineParser::new();
        assert_eq!(parser.feed(b"\n\n1\n"), vec!["", "", "1"]);
    }
}
