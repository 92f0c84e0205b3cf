use std::io::Read;

use tracing::trace;

use super::error::MxfError;
use super::layout;
use super::parser::{MxfPacketHeader, parse_line_count, parse_packet_header};
use crate::source::{ByteReader, ReadOutcome};

/// One decoded packet: its framing and the VANC payload cut to
/// `sample_count` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxfPacket {
    pub header: MxfPacketHeader,
    pub payload: Vec<u8>,
}

/// Streaming decoder over an extracted MXF ancillary data stream.
pub struct MxfReader<R> {
    input: ByteReader<R>,
}

impl<R: Read> MxfReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            input: ByteReader::new(inner),
        }
    }

    /// Next packet, or `None` when input ends exactly before a line count.
    pub fn next_packet(&mut self) -> Result<Option<MxfPacket>, MxfError> {
        let offset = self.input.position();
        let bytes = match self.input.read_array::<{ layout::LINE_COUNT_LEN }>()? {
            ReadOutcome::Complete(bytes) => bytes,
            ReadOutcome::End => return Ok(None),
            ReadOutcome::Truncated { actual } => {
                return Err(MxfError::Truncated {
                    field: "line count",
                    offset,
                    needed: layout::LINE_COUNT_LEN,
                    actual,
                });
            }
        };
        parse_line_count(&bytes).map_err(|err| err.at_offset(offset))?;

        let header_offset = self.input.position();
        let bytes = self
            .input
            .read_array::<{ layout::PACKET_HEADER_LEN }>()?
            .required(layout::PACKET_HEADER_LEN)
            .map_err(|short| MxfError::Truncated {
                field: "packet header",
                offset: header_offset,
                needed: short.needed,
                actual: short.actual,
            })?;
        let header = parse_packet_header(&bytes).map_err(|err| err.at_offset(header_offset))?;

        let array_offset = self.input.position();
        let array_len = header.array_len as usize;
        let array = self
            .input
            .read_bytes(array_len)?
            .required(array_len)
            .map_err(|short| MxfError::Truncated {
                field: "sample array",
                offset: array_offset,
                needed: short.needed,
                actual: short.actual,
            })?;

        trace!(
            offset,
            line = header.line_number,
            coding = header.sample_coding,
            samples = header.sample_count,
            "MXF VANC packet"
        );
        Ok(Some(MxfPacket {
            header,
            payload: header.payload_from(array),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::MxfReader;
    use crate::error::ErrorKind;
    use crate::formats::mxf::MxfError;

    fn packet(line: u16, coding: u8, samples: u16, array: &[u8]) -> Vec<u8> {
        let mut bytes = 1u16.to_be_bytes().to_vec();
        bytes.extend_from_slice(&line.to_be_bytes());
        bytes.push(1);
        bytes.push(coding);
        bytes.extend_from_slice(&samples.to_be_bytes());
        bytes.extend_from_slice(&(array.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&1u32.to_be_bytes());
        bytes.extend_from_slice(array);
        bytes
    }

    #[test]
    fn reads_packets_until_clean_end() {
        let mut stream = packet(9, 4, 3, &[0x61, 0x01, 0x00, 0x00]);
        stream.extend(packet(10, 10, 2, &[0x41, 0x05]));
        let mut reader = MxfReader::new(Cursor::new(stream));

        let first = reader.next_packet().unwrap().unwrap();
        assert_eq!(first.header.line_number, 9);
        assert_eq!(first.payload, vec![0x61, 0x01, 0x00]);
        let second = reader.next_packet().unwrap().unwrap();
        assert_eq!(second.header.sample_coding, 10);
        assert_eq!(second.payload, vec![0x41, 0x05]);
        assert!(reader.next_packet().unwrap().is_none());
    }

    #[test]
    fn empty_stream_has_no_packets() {
        let mut reader = MxfReader::new(Cursor::new(Vec::new()));
        assert!(reader.next_packet().unwrap().is_none());
    }

    #[test]
    fn half_a_line_count_is_truncation() {
        let mut reader = MxfReader::new(Cursor::new(vec![0x00]));
        let err = reader.next_packet().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Truncated);
    }

    #[test]
    fn missing_header_after_line_count_is_truncation() {
        let mut reader = MxfReader::new(Cursor::new(vec![0x00, 0x01]));
        let err = reader.next_packet().unwrap_err();
        assert!(matches!(
            err,
            MxfError::Truncated {
                field: "packet header",
                offset: 2,
                needed: 14,
                actual: 0
            }
        ));
    }

    #[test]
    fn short_sample_array_is_truncation() {
        let mut stream = packet(9, 4, 4, &[1, 2, 3, 4]);
        stream.truncate(stream.len() - 1);
        let mut reader = MxfReader::new(Cursor::new(stream));
        let err = reader.next_packet().unwrap_err();
        assert!(matches!(
            err,
            MxfError::Truncated {
                field: "sample array",
                offset: 16,
                needed: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn second_packet_with_two_lines_is_rejected_at_its_offset() {
        let mut stream = packet(9, 4, 2, &[0x61, 0x01]);
        let first_len = stream.len() as u64;
        stream.extend_from_slice(&2u16.to_be_bytes());
        let mut reader = MxfReader::new(Cursor::new(stream));
        assert!(reader.next_packet().unwrap().is_some());
        let err = reader.next_packet().unwrap_err();
        match err {
            MxfError::UnsupportedLineCount { offset, count } => {
                assert_eq!(offset, first_len);
                assert_eq!(count, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
