//! Marker construction and validation.

use thiserror::Error;

/// Code of `}`.
const OPEN_BRACE: u16 = b'}' as u16;
/// Code of `~`.
const TILDE: u16 = b'~' as u16;
/// Code of `{`.
const CLOSE_BRACE: u16 = b'{' as u16;

/// Most digits the length field may have.
pub const MAX_LENGTH_DIGITS: usize = 6;

/// Why a channel-digit sequence is not a hidden-message frame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("sequence does not start with `}}~`")]
    MissingOpening,

    #[error("no `~` ends the length field")]
    UnterminatedLength,

    #[error("length field is not followed by `~{{`")]
    MissingClosing,

    #[error("length field has {0} characters, at most 6 allowed")]
    LengthTooLong(usize),

    #[error("length field is not a decimal number")]
    InvalidLength,

    #[error("payload needs {needed} pixels past the marker, {available} remain")]
    Truncated { needed: usize, available: usize },
}

/// Header announcing a hidden payload of `payload_len` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Characters in the payload.
    pub payload_len: usize,
    /// Codes taken by the marker itself; the payload starts here.
    pub header_len: usize,
}

impl Marker {
    pub fn new(payload_len: usize) -> Self {
        debug_assert!(payload_len <= super::MAX_MESSAGE_LEN);
        Self {
            payload_len,
            header_len: 4 + digit_count(payload_len),
        }
    }

    /// The marker as character codes, e.g. `}~12~{`.
    pub fn to_codes(self) -> Vec<u8> {
        format!("}}~{}~{{", self.payload_len).into_bytes()
    }

    /// Codes needed for the marker plus its payload.
    pub fn frame_len(self) -> usize {
        self.header_len + self.payload_len
    }

    /// Validate the start of a channel-digit sequence as a marker.
    ///
    /// The length field ends at the first `~` after the opening pair. The
    /// payload bounds are not checked here.
    pub fn parse(codes: &[u16]) -> Result<Marker, FrameError> {
        if codes.len() < 2 || codes[0] != OPEN_BRACE || codes[1] != TILDE {
            return Err(FrameError::MissingOpening);
        }

        let end = codes[2..]
            .iter()
            .position(|&c| c == TILDE)
            .map(|p| p + 2)
            .ok_or(FrameError::UnterminatedLength)?;

        if codes.get(end + 1) != Some(&CLOSE_BRACE) {
            return Err(FrameError::MissingClosing);
        }

        let digits = &codes[2..end];
        if digits.len() > MAX_LENGTH_DIGITS {
            return Err(FrameError::LengthTooLong(digits.len()));
        }
        if digits.is_empty() || !digits.iter().all(|&c| is_digit_code(c)) {
            return Err(FrameError::InvalidLength);
        }

        let payload_len = digits
            .iter()
            .fold(0usize, |acc, &c| acc * 10 + (c - u16::from(b'0')) as usize);

        Ok(Marker {
            payload_len,
            header_len: end + 2,
        })
    }
}

#[inline]
fn is_digit_code(c: u16) -> bool {
    (u16::from(b'0')..=u16::from(b'9')).contains(&c)
}

/// Number of decimal digits in `n` (at least 1).
pub(crate) fn digit_count(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
