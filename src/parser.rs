/* src/parser.rs */

use alloc::vec::Vec;

use crate::Error;
use crate::extension::parse_extensions;
use crate::reader::Reader;
use crate::{ClientHello, Compression, ProtocolVersion};

const HANDSHAKE_CLIENT_HELLO: u8 = 0x01;
const CONTENT_TYPE_HANDSHAKE: u8 = 0x16;
const RANDOM_LEN: usize = 32;

/// Decode a TLS ClientHello from a raw Handshake message.
///
/// The input must begin with the handshake type byte `0x01`, i.e. the
/// record layer has already been removed. Bytes after the declared
/// handshake length are ignored.
///
/// # Errors
///
/// Returns [`Error::UnexpectedHandshakeType`] for any other handshake
/// type, [`Error::Truncated`] when a length prefix runs past the end of
/// the input, [`Error::NoExtensions`] when the extensions block is empty,
/// and [`Error::InvalidSniEntryType`] or [`Error::InvalidEcpf`] for
/// malformed fingerprinted extensions.
///
/// ```
/// # fn build() -> Vec<u8> {
/// #     let mut d = vec![0x01, 0x00, 0x00, 0x2f, 0x03, 0x03];
/// #     d.extend_from_slice(&[0u8; 32]);
/// #     d.extend_from_slice(&[0x00, 0x00, 0x02, 0x13, 0x01, 0x01, 0x00]);
/// #     d.extend_from_slice(&[0x00, 0x04, 0x00, 0x17, 0x00, 0x00]);
/// #     d
/// # }
/// # let data = build();
/// let hello = ja3hello::decode(&data).unwrap();
/// assert_eq!(hello.version.as_u16(), 0x0303);
/// assert_eq!(hello.extensions, vec![0x0017]);
/// ```
pub fn decode(data: &[u8]) -> Result<ClientHello<'_>, Error> {
	tracing::trace!(len = data.len(), "decoding ClientHello");
	let result = decode_handshake(data);
	match &result {
		Ok(hello) => tracing::trace!(
			cipher_suites = hello.cipher_suites.len(),
			extensions = hello.extensions.len(),
			curves = hello.supported_curves.len(),
			"decoded ClientHello"
		),
		Err(err) => tracing::debug!(error = %err, "rejected ClientHello"),
	}
	result
}

/// Decode a TLS ClientHello from a TLS record-layer message.
///
/// The input must begin with the content type byte `0x16` (Handshake).
/// The 5-byte record header is stripped and the payload forwarded to
/// [`decode`].
///
/// # Errors
///
/// Returns [`Error::NotHandshakeRecord`] when the content type is wrong,
/// [`Error::Truncated`] when the record is shorter than its header
/// claims, and any error [`decode`] produces for the payload.
pub fn decode_record(data: &[u8]) -> Result<ClientHello<'_>, Error> {
	let mut r = Reader::new(data);
	let content_type = r.read_u8("record content type")?;
	if content_type != CONTENT_TYPE_HANDSHAKE {
		tracing::debug!(content_type, "not a handshake record");
		return Err(Error::NotHandshakeRecord(content_type));
	}
	let _version = r.read_u16("record protocol version")?;
	let record_len = r.read_u16("record length")? as usize;
	let handshake = r.read_bytes(record_len, "record payload")?;
	decode(handshake)
}

fn decode_handshake(data: &[u8]) -> Result<ClientHello<'_>, Error> {
	let mut r = Reader::new(data);
	let hs_type = r.read_u8("handshake type")?;
	if hs_type != HANDSHAKE_CLIENT_HELLO {
		return Err(Error::UnexpectedHandshakeType(hs_type));
	}
	let body_len = r.read_u24("handshake length")? as usize;
	let body = r.read_bytes(body_len, "handshake body")?;
	decode_body(body)
}

fn decode_body(data: &[u8]) -> Result<ClientHello<'_>, Error> {
	let mut r = Reader::new(data);

	let version = ProtocolVersion {
		major: r.read_u8("major version")?,
		minor: r.read_u8("minor version")?,
	};
	r.skip(RANDOM_LEN, "client random")?;

	let sid_len = r.read_u8("session ID length")? as usize;
	r.skip(sid_len, "session ID")?;

	let cipher_suites = decode_cipher_suites(&mut r)?;

	// Fixed two-byte read: the length byte and the first method.
	let compression = Compression {
		method: r.read_u8("compression method")?,
		kind: r.read_u8("compression type")?,
	};

	let ext_len = r.read_u16("extensions length")? as usize;
	if ext_len == 0 {
		return Err(Error::NoExtensions);
	}
	let block = r.read_bytes(ext_len, "extensions data")?;
	let fields = parse_extensions(block)?;

	Ok(ClientHello {
		version,
		cipher_suites,
		compression,
		extensions: fields.types,
		sni: fields.sni,
		supported_curves: fields.supported_curves,
		ec_point_formats: fields.ec_point_formats,
	})
}

// An odd length leaves its last byte in the stream for the next field.
fn decode_cipher_suites(r: &mut Reader<'_>) -> Result<Vec<u16>, Error> {
	let len = r.read_u16("cipher suites length")? as usize;
	let cs_data = r.read_bytes(len & !1, "cipher suites data")?;
	let mut inner = Reader::new(cs_data);
	let mut suites = Vec::with_capacity(len / 2);
	while !inner.is_empty() {
		suites.push(inner.read_u16("cipher suite")?);
	}
	Ok(suites)
}
