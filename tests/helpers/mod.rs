/* tests/helpers/mod.rs */
#![allow(dead_code)]

/// Builder for raw ClientHello handshake messages.
pub(crate) struct HelloBuilder {
	pub(crate) version: [u8; 2],
	pub(crate) session_id: Vec<u8>,
	pub(crate) cipher_suites: Vec<u16>,
	pub(crate) compression: [u8; 2],
	pub(crate) extensions: Vec<u8>,
}

impl HelloBuilder {
	pub(crate) fn new() -> Self {
		Self {
			version: [0x03, 0x03],
			session_id: Vec::new(),
			cipher_suites: vec![0x1301],
			compression: [0x01, 0x00],
			extensions: Vec::new(),
		}
	}

	pub(crate) fn cipher_suites(mut self, suites: &[u16]) -> Self {
		self.cipher_suites = suites.to_vec();
		self
	}

	pub(crate) fn session_id(mut self, id: &[u8]) -> Self {
		self.session_id = id.to_vec();
		self
	}

	pub(crate) fn ext(mut self, type_id: u16, data: &[u8]) -> Self {
		push_u16(&mut self.extensions, type_id);
		push_u16(&mut self.extensions, data.len() as u16);
		self.extensions.extend_from_slice(data);
		self
	}

	pub(crate) fn sni(self, host: &[u8]) -> Self {
		let list_len = 1 + 2 + host.len();
		let mut data = Vec::new();
		push_u16(&mut data, list_len as u16);
		data.push(0x00); // host_name
		push_u16(&mut data, host.len() as u16);
		data.extend_from_slice(host);
		self.ext(0x0000, &data)
	}

	pub(crate) fn groups(self, groups: &[u16]) -> Self {
		let mut data = Vec::new();
		push_u16(&mut data, (groups.len() * 2) as u16);
		for &g in groups {
			push_u16(&mut data, g);
		}
		self.ext(0x000a, &data)
	}

	pub(crate) fn point_formats(self, formats: &[u8]) -> Self {
		let mut data = vec![formats.len() as u8];
		data.extend_from_slice(formats);
		self.ext(0x000b, &data)
	}

	/// ClientHello body, without the handshake header.
	pub(crate) fn body(&self) -> Vec<u8> {
		let mut body = Vec::new();
		body.extend_from_slice(&self.version);
		body.extend_from_slice(&[0xAB; 32]); // random
		body.push(self.session_id.len() as u8);
		body.extend_from_slice(&self.session_id);
		push_u16(&mut body, (self.cipher_suites.len() * 2) as u16);
		for &cs in &self.cipher_suites {
			push_u16(&mut body, cs);
		}
		body.extend_from_slice(&self.compression);
		push_u16(&mut body, self.extensions.len() as u16);
		body.extend_from_slice(&self.extensions);
		body
	}

	/// Full handshake message: type, 24-bit length, body.
	pub(crate) fn build(&self) -> Vec<u8> {
		wrap_handshake(&self.body())
	}
}

pub(crate) fn wrap_handshake(body: &[u8]) -> Vec<u8> {
	let mut msg = vec![0x01]; // handshake type
	let len = body.len() as u32;
	msg.push((len >> 16) as u8);
	msg.push((len >> 8) as u8);
	msg.push(len as u8);
	msg.extend_from_slice(body);
	msg
}

/// Wrap a raw handshake message in a TLS record layer.
pub(crate) fn wrap_record(handshake: &[u8]) -> Vec<u8> {
	let mut rec = vec![0x16, 0x03, 0x01]; // content type + version
	push_u16(&mut rec, handshake.len() as u16);
	rec.extend_from_slice(handshake);
	rec
}

/// The example.com hello: TLS 1.2, two suites, SNI, x25519, uncompressed.
pub(crate) fn example_hello() -> Vec<u8> {
	HelloBuilder::new()
		.cipher_suites(&[0x1301, 0x1302])
		.sni(b"example.com")
		.groups(&[0x001d])
		.point_formats(&[0x00])
		.build()
}

/// A Chrome-like hello with GREASE in every list it can appear in.
pub(crate) fn greased_hello() -> Vec<u8> {
	HelloBuilder::new()
		.session_id(&[0xCD; 32])
		.cipher_suites(&[0x0A0A, 0x1301, 0x1302, 0x1303, 0xC02B])
		.ext(0x1A1A, &[])
		.sni(b"www.example.org")
		.ext(0x0017, &[])
		.ext(0xff01, &[0x00])
		.groups(&[0xAAAA, 0x001d, 0x0017, 0x0018])
		.point_formats(&[0x00])
		.ext(0x0010, &[0x00, 0x03, 0x02, b'h', b'2'])
		.ext(0xFAFA, &[0x00])
		.build()
}

pub(crate) fn push_u16(buf: &mut Vec<u8>, val: u16) {
	buf.push((val >> 8) as u8);
	buf.push(val as u8);
}
