//! Text hidden in the ones digits of pixel color channels.
//!
//! Each pixel carries one character code `c` in `0..=255`. Its hundreds, tens
//! and ones digits replace the ones digit of the red, green and blue channel
//! respectively; the higher digits of each channel are kept.
//!
//! A message is written as a frame starting at flat pixel 0:
//!
//! ```text
//! }~        2 codes, opening delimiter
//! <digits>  1-6 codes, decimal length N of the payload
//! ~{        2 codes, closing delimiter
//! <text>    N codes, one per character
//! ```
//!
//! For example a 12-character message is preceded by `}~12~{`.
//!
//! Decoding reads one channel-digit number per pixel and accepts the frame
//! only if the marker validates. Any image whose first pixels happen to spell
//! a valid marker is read as carrying a message.

mod channel;
mod codec;
mod marker;

pub use channel::{decode_pixel, embed_digit, encode_pixel};
pub use codec::{decode, encode, max_message_len};
pub use marker::{FrameError, Marker};

use thiserror::Error;

/// Largest payload length a marker can announce.
pub const MAX_MESSAGE_LEN: usize = 999_999;

/// Errors returned by [`encode`]. The grid is never modified when one occurs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StegoError {
    /// The message has more characters than a marker can describe.
    #[error("Message has {len} characters, the maximum is 999999")]
    MessageTooLong { len: usize },

    /// The frame needs more pixels than the grid has.
    #[error("Message needs {required} pixels but the image only has {available}")]
    InsufficientCapacity { required: usize, available: usize },

    /// A character's code point does not fit in one pixel.
    #[error("Character {ch:?} at position {index} is outside the 0-255 range")]
    UnsupportedCharacter { ch: char, index: usize },
}
