/* src/ja3.rs */

use alloc::string::String;

use md5::{Digest, Md5};

use crate::ClientHello;

/// Separates the five JA3 fields.
pub const FIELD_DELIMITER: char = ',';
/// Separates values within a JA3 field.
pub const VALUE_DELIMITER: char = '-';

#[cfg(feature = "std")]
static SCRATCH: crate::BufferPool = crate::BufferPool::new();

/// Delimiter characters used when building the JA3 string.
///
/// The default is `,` between fields and `-` between values. Anything
/// else produces strings whose hashes will not match other JA3 tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
	/// Placed after each of the first four fields.
	pub field: char,
	/// Placed between consecutive values of one field.
	pub value: char,
}

impl Default for Delimiters {
	fn default() -> Self {
		Self {
			field: FIELD_DELIMITER,
			value: VALUE_DELIMITER,
		}
	}
}

/// A computed JA3 fingerprint together with the string it was hashed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ja3 {
	/// The canonical `version,ciphers,extensions,curves,formats` string.
	pub canonical: String,
	/// Lowercase hex MD5 of `canonical`, always 32 characters.
	pub hash: String,
}

/// Turns a decoded [`ClientHello`] into its JA3 string and hash.
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
/// let ja3 = ja3hello::Ja3Encoder::new().encode(&hello);
/// assert_eq!(ja3.canonical, "771,4865,23,,");
/// assert_eq!(ja3.hash.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ja3Encoder {
	delimiters: Delimiters,
}

impl Ja3Encoder {
	/// Encoder using the standard `,` and `-` delimiters.
	#[must_use]
	pub const fn new() -> Self {
		Self::with_delimiters(Delimiters {
			field: FIELD_DELIMITER,
			value: VALUE_DELIMITER,
		})
	}

	/// Encoder using custom delimiters.
	#[must_use]
	pub const fn with_delimiters(delimiters: Delimiters) -> Self {
		Self { delimiters }
	}

	/// The delimiters this encoder writes.
	#[must_use]
	pub const fn delimiters(&self) -> Delimiters {
		self.delimiters
	}

	/// Clear `buf` and write the canonical JA3 string into it.
	pub fn write_canonical(&self, hello: &ClientHello<'_>, buf: &mut String) {
		buf.clear();
		self.write_fields(hello, buf);
	}

	/// Build the canonical JA3 string.
	#[must_use]
	pub fn canonical_string(&self, hello: &ClientHello<'_>) -> String {
		let mut buf = String::new();
		self.write_canonical(hello, &mut buf);
		buf
	}

	/// Compute the canonical string and its hash.
	#[must_use]
	pub fn encode(&self, hello: &ClientHello<'_>) -> Ja3 {
		let canonical = self.canonical_string(hello);
		let hash = digest(&canonical);
		Ja3 { canonical, hash }
	}

	/// Compute only the 32-character JA3 hash.
	///
	/// With the `std` feature the canonical string is built in a buffer
	/// borrowed from a process-wide pool, so repeated calls do not
	/// allocate for it.
	#[must_use]
	pub fn fingerprint(&self, hello: &ClientHello<'_>) -> String {
		#[cfg(feature = "std")]
		{
			let mut buf = SCRATCH.acquire();
			self.write_canonical(hello, &mut buf);
			digest(&buf)
		}
		#[cfg(not(feature = "std"))]
		{
			digest(&self.canonical_string(hello))
		}
	}

	fn write_fields(&self, hello: &ClientHello<'_>, out: &mut String) {
		let field = self.delimiters.field;
		push_decimal(out, hello.version.as_u16());
		out.push(field);
		self.write_list(out, &hello.cipher_suites);
		out.push(field);
		self.write_list(out, &hello.extensions);
		out.push(field);
		self.write_list(out, &hello.supported_curves);
		out.push(field);
		// Last field: no trailing delimiter, nothing at all when empty.
		self.write_list(out, &hello.ec_point_formats);
	}

	fn write_list<T: Copy + Into<u16>>(&self, out: &mut String, values: &[T]) {
		for (i, &v) in values.iter().enumerate() {
			if i > 0 {
				out.push(self.delimiters.value);
			}
			push_decimal(out, v.into());
		}
	}
}

fn push_decimal(out: &mut String, mut value: u16) {
	let mut digits = [0u8; 5];
	let mut start = digits.len();
	loop {
		start -= 1;
		digits[start] = b'0' + (value % 10) as u8;
		value /= 10;
		if value == 0 {
			break;
		}
	}
	for &d in &digits[start..] {
		out.push(char::from(d));
	}
}

/// Compute the JA3 hash of a decoded ClientHello with the standard
/// delimiters.
#[must_use]
pub fn fingerprint(hello: &ClientHello<'_>) -> String {
	Ja3Encoder::new().fingerprint(hello)
}

fn digest(canonical: &str) -> String {
	hex::encode(Md5::digest(canonical.as_bytes()))
}
