/// One decoded VANC packet, ready for display.
///
/// `data` starts after the data-count byte (payload offset 3); the count byte
/// itself is not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VancLine {
    pub line_number: u16,
    pub did: u8,
    pub sdid: u8,
    pub data: Vec<u8>,
}

/// Offset of the first user data word in a VANC payload.
pub const DATA_OFFSET: usize = 3;

impl VancLine {
    /// Split a raw VANC payload into its identifiers and data words.
    ///
    /// Returns `None` when the payload is too short to carry DID and SDID.
    ///
    /// # Examples
    /// ```
    /// use vancdump_core::formats::vanc::VancLine;
    ///
    /// let line = VancLine::from_payload(9, &[0x61, 0x02, 0x01, 0xab, 0xcd]).unwrap();
    /// assert_eq!(line.did, 0x61);
    /// assert_eq!(line.data, vec![0xab, 0xcd]);
    /// assert!(VancLine::from_payload(9, &[0x61]).is_none());
    /// ```
    pub fn from_payload(line_number: u16, payload: &[u8]) -> Option<Self> {
        let (&did, rest) = payload.split_first()?;
        let &sdid = rest.first()?;
        Some(Self {
            line_number,
            did,
            sdid,
            data: payload.get(DATA_OFFSET..).unwrap_or_default().to_vec(),
        })
    }
}
