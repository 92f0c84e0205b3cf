use std::io::{ErrorKind, Read};

use super::error::{Shortfall, SourceError};

/// Result of an exact-length read.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome<T> {
    /// All requested bytes were available.
    Complete(T),
    /// No byte was available at all.
    End,
    /// Input ended after `actual` bytes, before the request was satisfied.
    Truncated { actual: usize },
}

impl<T> ReadOutcome<T> {
    /// Treat any shortage, including a clean end, as a truncation of a field
    /// of `needed` bytes.
    ///
    /// # Examples
    /// ```
    /// use vancdump_core::source::{ReadOutcome, Shortfall};
    ///
    /// let outcome: ReadOutcome<[u8; 4]> = ReadOutcome::End;
    /// assert_eq!(outcome.required(4), Err(Shortfall { needed: 4, actual: 0 }));
    /// ```
    pub fn required(self, needed: usize) -> Result<T, Shortfall> {
        match self {
            ReadOutcome::Complete(value) => Ok(value),
            ReadOutcome::End => Err(Shortfall { needed, actual: 0 }),
            ReadOutcome::Truncated { actual } => Err(Shortfall { needed, actual }),
        }
    }
}

/// Exact-length reads over any `Read`, tracking the absolute input position.
pub struct ByteReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<ReadOutcome<[u8; N]>, SourceError> {
        let mut buf = [0u8; N];
        let filled = self.fill(&mut buf)?;
        Ok(classify(buf, filled, N))
    }

    /// Read exactly `len` bytes without allocating `len` up front, so a
    /// corrupt length field cannot force a huge allocation.
    pub fn read_bytes(&mut self, len: usize) -> Result<ReadOutcome<Vec<u8>>, SourceError> {
        let mut buf = Vec::new();
        let filled = (&mut self.inner).take(len as u64).read_to_end(&mut buf)?;
        self.position += filled as u64;
        Ok(classify(buf, filled, len))
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
        self.position += filled as u64;
        Ok(filled)
    }
}

fn classify<T>(value: T, filled: usize, needed: usize) -> ReadOutcome<T> {
    if filled == needed {
        ReadOutcome::Complete(value)
    } else if filled == 0 {
        ReadOutcome::End
    } else {
        ReadOutcome::Truncated { actual: filled }
    }
}
