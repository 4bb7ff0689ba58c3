// Bring in formatting core
use core::fmt::{self, Write};

/// A fixed-capacity text buffer. Writes past the end are truncated at a
/// character boundary instead of failing, so a long log line loses its tail
/// rather than the whole message.
pub struct LineBuf<const N: usize> {
    buf: [u8; N],
    pos: usize,
    truncated: bool,
}

impl<const N: usize> LineBuf<N> {
    pub const fn new() -> Self {
        LineBuf { buf: [0; N], pos: 0, truncated: false }
    }

    pub fn as_str(&self) -> &str {
        // Safety: only whole UTF-8 sequences are ever copied in
        unsafe { core::str::from_utf8_unchecked(&self.buf[..self.pos]) }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.pos = 0;
        self.truncated = false;
    }

    pub fn push_str(&mut self, s: &str) {
        let room = N - self.pos;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        if take < s.len() {
            self.truncated = true;
        }
        self.buf[self.pos..self.pos + take].copy_from_slice(&s.as_bytes()[..take]);
        self.pos += take;
    }
}

impl<const N: usize> Default for LineBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for LineBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_into_fixed_storage() {
        let mut line = LineBuf::<32>::new();
        write!(line, "bg {} -> {}", 1, 2).unwrap();
        assert_eq!(line.as_str(), "bg 1 -> 2");
        assert!(!line.was_truncated());
    }

    #[test]
    fn overflow_truncates_on_char_boundary() {
        let mut line = LineBuf::<4>::new();
        line.push_str("ab");
        line.push_str("✓x");
        // '✓' is three bytes and only two fit.
        assert_eq!(line.as_str(), "ab");
        assert!(line.was_truncated());
        line.clear();
        assert!(line.is_empty());
    }
}
