//! Legacy ping protocol implementation
//!
//! Wire format of the pre-1.7 server list ping:
//! - Request: the two raw bytes `FE 01`
//! - Response: one status byte (`FF`), a two byte big-endian length prefix
//!   (ignored, the stream is read to completion instead), then UTF-16BE text
//!
//! The decoded text starts with the section sign (`§`) and carries at least
//! six NUL-separated fields:
//! `[0]` marker, `[1]` protocol version, `[2]` game version, `[3]` MOTD,
//! `[4]` current players, `[5]` max players.
//!
//! This module is pure frame decoding; the socket work lives in
//! [`probe`](crate::probe).

use crate::error::{ProbeError, Result};

/// Query payload sent to the server
pub const LEGACY_PING_REQUEST: [u8; 2] = [0xFE, 0x01];

/// Expected first byte of every response (the kick packet id)
pub const RESPONSE_ID: u8 = 0xFF;

/// Maximum response size (2KB, generous for a six field status line)
pub const MAX_RESPONSE_SIZE: usize = 2048;

/// Bytes preceding the UTF-16BE payload: packet id + length prefix
const HEADER_LEN: usize = 3;

/// Field separator inside the decoded status text
const FIELD_SEPARATOR: char = '\u{0}';

/// Minimum number of NUL-separated fields in a valid status line
const MIN_FIELDS: usize = 6;

/// Status reported by a server in response to a legacy ping
///
/// Immutable snapshot of a single probe. Player counts stay strings because
/// the protocol carries them as text and some server mods put non-numeric
/// values there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatus {
    /// Raw MOTD, still containing `§` formatting codes
    pub motd: String,
    /// Maximum player count
    pub max_players: String,
    /// Current player count
    pub current_players: String,
    /// Game version string, e.g. `1.8.9`
    pub version: String,
}

/// Decode a raw legacy ping response frame into a [`ServerStatus`]
///
/// Partial frames are decoded on a best-effort basis: as long as the header,
/// the leading `§` and six fields are present, trailing truncation inside the
/// last field goes unnoticed, which matches how the original protocol was
/// consumed in practice.
pub fn decode_status(frame: &[u8]) -> Result<ServerStatus> {
    if frame.is_empty() {
        return Err(ProbeError::MalformedResponse("empty response"));
    }
    if frame[0] != RESPONSE_ID {
        return Err(ProbeError::MalformedResponse("unexpected packet id"));
    }
    if frame.len() < HEADER_LEN {
        return Err(ProbeError::MalformedResponse("truncated header"));
    }

    let text = decode_utf16be(&frame[HEADER_LEN..]);
    if !text.starts_with('§') {
        return Err(ProbeError::MalformedResponse("missing section sign prefix"));
    }

    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return Err(ProbeError::MalformedResponse("too few status fields"));
    }

    Ok(ServerStatus {
        motd: fields[3].to_string(),
        max_players: fields[5].to_string(),
        current_players: fields[4].to_string(),
        version: fields[2].to_string(),
    })
}

/// Decode UTF-16BE bytes, replacing invalid code units
///
/// A trailing odd byte is dropped; unpaired surrogates become U+FFFD. The
/// status line is display data, so lossy decoding beats rejecting the frame.
fn decode_utf16be(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
