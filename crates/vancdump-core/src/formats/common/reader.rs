use std::ops::Range;

use crate::source::Shortfall;

/// Bounds-checked field access over an already-read byte slice.
pub(crate) struct FieldReader<'a> {
    bytes: &'a [u8],
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub(crate) fn require_len(&self, needed: usize) -> Result<(), Shortfall> {
        if self.bytes.len() < needed {
            return Err(Shortfall {
                needed,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn read_u8(&self, offset: usize) -> Result<u8, Shortfall> {
        self.bytes.get(offset).copied().ok_or(Shortfall {
            needed: offset + 1,
            actual: self.bytes.len(),
        })
    }

    pub(crate) fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], Shortfall> {
        self.bytes.get(range.clone()).ok_or(Shortfall {
            needed: range.end,
            actual: self.bytes.len(),
        })
    }

    pub(crate) fn read_array<const N: usize>(&self, range: Range<usize>) -> Result<[u8; N], Shortfall> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| Shortfall {
            needed: N,
            actual: bytes.len(),
        })
    }

    pub(crate) fn read_u16_be(&self, range: Range<usize>) -> Result<u16, Shortfall> {
        self.read_array(range).map(u16::from_be_bytes)
    }

    pub(crate) fn read_u16_le(&self, range: Range<usize>) -> Result<u16, Shortfall> {
        self.read_array(range).map(u16::from_le_bytes)
    }

    pub(crate) fn read_u32_be(&self, range: Range<usize>) -> Result<u32, Shortfall> {
        self.read_array(range).map(u32::from_be_bytes)
    }

    pub(crate) fn read_i64_le(&self, range: Range<usize>) -> Result<i64, Shortfall> {
        self.read_array(range).map(i64::from_le_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldReader;
    use crate::source::Shortfall;

    #[test]
    fn reads_mixed_endianness() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        let reader = FieldReader::new(&bytes);
        assert_eq!(reader.read_u16_be(0..2).unwrap(), 0x0102);
        assert_eq!(reader.read_u16_le(0..2).unwrap(), 0x0201);
        assert_eq!(reader.read_u32_be(0..4).unwrap(), 0x0102_0304);
    }

    #[test]
    fn reads_negative_i64_le() {
        let bytes = (-2i64).to_le_bytes();
        let reader = FieldReader::new(&bytes);
        assert_eq!(reader.read_i64_le(0..8).unwrap(), -2);
    }

    #[test]
    fn out_of_range_reports_shortfall() {
        let bytes = [0u8; 3];
        let reader = FieldReader::new(&bytes);
        assert_eq!(
            reader.read_u32_be(0..4),
            Err(Shortfall {
                needed: 4,
                actual: 3
            })
        );
        assert_eq!(
            reader.read_u8(3),
            Err(Shortfall {
                needed: 4,
                actual: 3
            })
        );
    }
}
