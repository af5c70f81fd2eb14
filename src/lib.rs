/* src/lib.rs */

//! JA3 fingerprints from TLS ClientHello messages.
//!
//! Decoding and hashing are separate steps:
//!
//! - [`decode`] reads a raw handshake message (first byte `0x01`) into a
//!   [`ClientHello`] holding the fields JA3 needs. [`decode_record`]
//!   accepts the same message still wrapped in a TLS record (first byte
//!   `0x16`), and [`decode_hex`] a hex dump of either.
//! - [`Ja3Encoder`] turns a [`ClientHello`] into the canonical
//!   `version,ciphers,extensions,curves,formats` string and its MD5.
//!
//! [`fingerprint_bytes`] and [`fingerprint_hex`] do both in one call.
//!
//! GREASE values (see [`is_grease`]) are removed from the extension and
//! curve lists. Both steps are pure; with the `std` feature the encoder
//! draws its scratch buffers from a thread-safe [`BufferPool`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod extension;
mod grease;
mod ja3;
mod parser;
#[cfg(feature = "std")]
mod pool;
mod reader;

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

pub use crate::error::Error;
pub use crate::grease::is_grease;
pub use crate::ja3::{Delimiters, FIELD_DELIMITER, Ja3, Ja3Encoder, VALUE_DELIMITER, fingerprint};
pub use crate::parser::{decode, decode_record};
#[cfg(feature = "std")]
pub use crate::pool::{BufferPool, PooledBuffer};

/// Protocol version declared in the ClientHello body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolVersion {
	/// Major version, `3` for every SSL 3.0 / TLS version.
	pub major: u8,
	/// Minor version: `0` is SSL 3.0, `1` is TLS 1.0, `3` is TLS 1.2.
	pub minor: u8,
}

impl ProtocolVersion {
	/// Version as the 16-bit wire value, e.g. `0x0303` for TLS 1.2.
	#[must_use]
	pub const fn as_u16(self) -> u16 {
		((self.major as u16) << 8) | self.minor as u16
	}
}

impl fmt::Display for ProtocolVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}

/// The two bytes read where the compression methods start.
///
/// Only a fixed pair is read: the list length byte and the first method.
/// Longer method lists are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Compression {
	/// First byte, the method list length on the wire.
	pub method: u8,
	/// Second byte, the first offered method.
	pub kind: u8,
}

/// The ClientHello fields that make up a JA3 fingerprint.
///
/// Built once by [`decode`] and not modified afterwards. The SNI hostname
/// borrows from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHello<'a> {
	/// Legacy protocol version from the ClientHello body.
	pub version: ProtocolVersion,
	/// Cipher suite identifiers in wire order. GREASE is kept here.
	pub cipher_suites: Vec<u16>,
	/// Compression bytes.
	pub compression: Compression,
	/// Extension type identifiers in wire order, GREASE values removed.
	pub extensions: Vec<u16>,
	/// Hostname bytes from the server name extension, if present.
	pub sni: Option<&'a [u8]>,
	/// Supported groups in wire order, GREASE values removed.
	pub supported_curves: Vec<u16>,
	/// EC point formats in wire order.
	pub ec_point_formats: Vec<u8>,
}

impl ClientHello<'_> {
	/// Return the SNI hostname if present and valid UTF-8.
	#[must_use]
	pub fn server_name(&self) -> Option<&str> {
		self.sni.and_then(|name| core::str::from_utf8(name).ok())
	}

	/// Compute this hello's JA3 hash with the standard delimiters.
	#[must_use]
	pub fn ja3(&self) -> String {
		fingerprint(self)
	}
}

/// Decode a hex-encoded handshake message into bytes.
///
/// Surrounding whitespace is ignored. The result is passed to [`decode`]
/// or [`decode_record`] as appropriate.
///
/// # Errors
///
/// Returns [`Error::InvalidHexCharacter`] or [`Error::OddHexLength`] for
/// malformed input.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, Error> {
	Ok(hex::decode(input.trim())?)
}

/// Decode a raw handshake message and return its JA3 hash.
///
/// # Errors
///
/// Returns any error produced by [`decode`].
pub fn fingerprint_bytes(data: &[u8]) -> Result<String, Error> {
	decode(data).map(|hello| fingerprint(&hello))
}

/// Decode a hex-encoded handshake message and return its JA3 hash.
///
/// Input starting with a record header (`16`) is unwrapped first.
///
/// # Errors
///
/// Returns hex errors from [`decode_hex`] and any error from [`decode`]
/// or [`decode_record`].
///
/// ```
/// let hex = "010000330303\
///            0000000000000000000000000000000000000000000000000000000000000000\
///            00 0004 13011302 0100 0006 000b00020100"
/// 	.replace(' ', "");
/// let hash = ja3hello::fingerprint_hex(&hex).unwrap();
/// assert_eq!(hash.len(), 32);
/// ```
pub fn fingerprint_hex(input: &str) -> Result<String, Error> {
	let data = decode_hex(input)?;
	let hello = match data.first() {
		Some(0x16) => decode_record(&data)?,
		_ => decode(&data)?,
	};
	Ok(fingerprint(&hello))
}
