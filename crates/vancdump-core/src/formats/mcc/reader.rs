use std::io::{BufRead, ErrorKind};

use tracing::debug;

use super::error::MccError;
use super::layout;
use super::parser::check_signature;

/// Line reader for MCC text that validates the signature on construction and
/// caps line length at `layout::MAX_LINE_SIZE` bytes.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub struct MccReader<R> {
    inner: R,
    line_number: usize,
    buf: Vec<u8>,
    /// The previous line ended on `\r`; a `\n` right after it belongs to it.
    after_cr: bool,
}

impl<R: BufRead> MccReader<R> {
    pub fn new(inner: R) -> Result<Self, MccError> {
        let mut reader = Self {
            inner,
            line_number: 0,
            buf: Vec::new(),
            after_cr: false,
        };
        let (_, first) = reader.next_line()?.ok_or(MccError::MissingSignature)?;
        check_signature(&first)?;
        debug!("MCC signature validated");
        Ok(reader)
    }

    /// Next line without its terminator, paired with its 1-based line
    /// number. `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<(usize, String)>, MccError> {
        self.buf.clear();
        let mut terminated = false;

        while !terminated {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if available.is_empty() {
                break;
            }

            let skip = usize::from(self.after_cr && available[0] == b'\n');
            self.after_cr = false;
            let rest = &available[skip..];
            let (len, used) = match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    terminated = true;
                    self.after_cr = rest[end] == b'\r';
                    (end, skip + end + 1)
                }
                None => (rest.len(), available.len()),
            };

            if self.buf.len() + len > layout::MAX_LINE_SIZE {
                self.line_number += 1;
                return Err(MccError::LineTooLong {
                    line: self.line_number,
                    max: layout::MAX_LINE_SIZE,
                });
            }
            self.buf.extend_from_slice(&rest[..len]);
            self.inner.consume(used);
        }

        if !terminated && self.buf.is_empty() {
            return Ok(None);
        }
        self.line_number += 1;

        let text = String::from_utf8(std::mem::take(&mut self.buf)).map_err(|_| MccError::NotUtf8 {
            line: self.line_number,
        })?;
        Ok(Some((self.line_number, text)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use super::MccReader;
    use crate::error::ErrorKind;
    use crate::formats::mcc::{MccError, layout};

    fn reader(text: &str) -> Result<MccReader<Cursor<Vec<u8>>>, MccError> {
        MccReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn yields_numbered_lines_after_signature() {
        let mut mcc = reader("File Format=MacCaption_MCC V1.0\r\n\r\nUUID=abc\nlast").unwrap();
        assert_eq!(mcc.next_line().unwrap(), Some((2, String::new())));
        assert_eq!(mcc.next_line().unwrap(), Some((3, "UUID=abc".to_string())));
        assert_eq!(mcc.next_line().unwrap(), Some((4, "last".to_string())));
        assert_eq!(mcc.next_line().unwrap(), None);
    }

    #[test]
    fn empty_input_has_no_signature() {
        let err = reader("").err().unwrap();
        assert!(matches!(err, MccError::MissingSignature));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn wrong_signature_is_format_error() {
        let err = reader("File Format=MacCaption_MCC V2.0\n").err().unwrap();
        assert!(err.to_string().contains("file not in MCC format"));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn line_at_limit_is_accepted_and_longer_is_rejected() {
        let at_limit = "A".repeat(layout::MAX_LINE_SIZE);
        let text = format!("{}\n{at_limit}\r\n{at_limit}B\n", layout::SIGNATURE);
        let mut mcc = reader(&text).unwrap();
        assert_eq!(mcc.next_line().unwrap().map(|(n, l)| (n, l.len())), Some((2, layout::MAX_LINE_SIZE)));
        let err = mcc.next_line().unwrap_err();
        assert!(matches!(err, MccError::LineTooLong { line: 3, .. }));
    }

    #[test]
    fn lone_carriage_returns_end_lines() {
        let mut mcc = reader("File Format=MacCaption_MCC V1.0\r\rUUID=x\r\nlast\r").unwrap();
        assert_eq!(mcc.next_line().unwrap(), Some((2, String::new())));
        assert_eq!(mcc.next_line().unwrap(), Some((3, "UUID=x".to_string())));
        assert_eq!(mcc.next_line().unwrap(), Some((4, "last".to_string())));
        assert_eq!(mcc.next_line().unwrap(), None);
    }

    #[test]
    fn crlf_split_across_buffer_refills_is_one_terminator() {
        let text = format!("{}\r\nA\r\nB\n", layout::SIGNATURE);
        let input = BufReader::with_capacity(1, Cursor::new(text.into_bytes()));
        let mut mcc = MccReader::new(input).unwrap();
        assert_eq!(mcc.next_line().unwrap(), Some((2, "A".to_string())));
        assert_eq!(mcc.next_line().unwrap(), Some((3, "B".to_string())));
        assert_eq!(mcc.next_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_format_error() {
        let mut bytes = format!("{}\n", layout::SIGNATURE).into_bytes();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let mut mcc = MccReader::new(Cursor::new(bytes)).unwrap();
        let err = mcc.next_line().unwrap_err();
        assert!(matches!(err, MccError::NotUtf8 { line: 2 }));
    }
}
