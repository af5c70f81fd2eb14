/* src/error.rs */

/// Errors produced while decoding a ClientHello for fingerprinting.
///
/// Every variant is terminal for the message being decoded; no partially
/// decoded hello is ever handed back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// Handshake message type is not ClientHello (`0x01`).
	#[error("unexpected handshake type: expected 0x01 (ClientHello), got {0:#04x}")]
	UnexpectedHandshakeType(u8),

	/// TLS record content type is not Handshake (`0x16`).
	#[error("unexpected content type: expected 0x16 (Handshake), got {0:#04x}")]
	NotHandshakeRecord(u8),

	/// A length prefix promised more bytes than the input holds.
	#[error("truncated {field}")]
	Truncated {
		/// Name of the field being read when the input ran out.
		field: &'static str,
	},

	/// The extensions block is present but declares a length of zero.
	#[error("ClientHello carries no extensions")]
	NoExtensions,

	/// The server name entry is not a DNS hostname.
	#[error("unexpected SNI entry type: expected 0x00 (host_name), got {0:#04x}")]
	InvalidSniEntryType(u8),

	/// The EC point formats extension is too short to hold a format list.
	#[error("invalid ec_point_formats extension: {len} content bytes, need at least 2")]
	InvalidEcpf {
		/// Content length of the offending extension.
		len: usize,
	},

	/// Hex input contains a character outside `[0-9a-fA-F]`.
	#[error("invalid hex character {c:?} at position {index}")]
	InvalidHexCharacter {
		/// The offending character.
		c: char,
		/// Its position in the trimmed input.
		index: usize,
	},

	/// Hex input has an odd number of digits.
	#[error("hex input has an odd number of digits")]
	OddHexLength,
}

impl From<hex::FromHexError> for Error {
	fn from(err: hex::FromHexError) -> Self {
		match err {
			hex::FromHexError::InvalidHexCharacter { c, index } => Self::InvalidHexCharacter { c, index },
			hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => Self::OddHexLength,
		}
	}
}
