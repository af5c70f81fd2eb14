/* demos/fingerprint.rs */
#![allow(missing_docs)]

//! Print the JA3 string and hash for each hex-encoded ClientHello given on
//! the command line, or for a built-in sample when none is given.
//!
//! ```text
//! cargo run --example fingerprint -- 16030100...
//! ```

fn main() {
	let args: Vec<String> = std::env::args().skip(1).collect();
	let inputs = if args.is_empty() {
		vec![hex::encode(build_sample_record())]
	} else {
		args
	};

	for input in &inputs {
		let data = match ja3hello::decode_hex(input) {
			Ok(data) => data,
			Err(e) => {
				eprintln!("Bad hex input: {e}");
				continue;
			}
		};
		let decoded = if data.first() == Some(&0x16) {
			ja3hello::decode_record(&data)
		} else {
			ja3hello::decode(&data)
		};
		match decoded {
			Ok(hello) => {
				let ja3 = ja3hello::Ja3Encoder::new().encode(&hello);
				println!("Version: {} ({:#06x})", hello.version, hello.version.as_u16());
				if let Some(sni) = hello.server_name() {
					println!("SNI: {sni}");
				}
				println!("JA3: {}", ja3.canonical);
				println!("JA3 hash: {}", ja3.hash);
			}
			Err(e) => eprintln!("Decode error: {e}"),
		}
	}
}

fn build_sample_record() -> Vec<u8> {
	let mut body = Vec::new();
	body.extend_from_slice(&[0x03, 0x03]);
	body.extend_from_slice(&[0x42; 32]);
	body.push(0x00);
	body.extend_from_slice(&[0x00, 0x06]);
	body.extend_from_slice(&[0x0A, 0x0A]); // GREASE
	body.extend_from_slice(&[0x13, 0x01]); // TLS_AES_128_GCM_SHA256
	body.extend_from_slice(&[0x13, 0x02]); // TLS_AES_256_GCM_SHA384
	body.extend_from_slice(&[0x01, 0x00]);

	let mut exts = Vec::new();

	// SNI
	let host = b"www.example.com";
	let sni_list = 1 + 2 + host.len();
	push_u16(&mut exts, 0x0000);
	push_u16(&mut exts, (2 + sni_list) as u16);
	push_u16(&mut exts, sni_list as u16);
	exts.push(0x00);
	push_u16(&mut exts, host.len() as u16);
	exts.extend_from_slice(host);

	// Supported Groups: GREASE, x25519, secp256r1
	push_u16(&mut exts, 0x000a);
	push_u16(&mut exts, 8);
	push_u16(&mut exts, 6);
	push_u16(&mut exts, 0x2A2A);
	push_u16(&mut exts, 0x001d);
	push_u16(&mut exts, 0x0017);

	// EC Point Formats: uncompressed
	push_u16(&mut exts, 0x000b);
	push_u16(&mut exts, 2);
	exts.push(1);
	exts.push(0x00);

	push_u16(&mut body, exts.len() as u16);
	body.extend_from_slice(&exts);

	let mut hs = vec![0x01];
	let len = body.len() as u32;
	hs.push((len >> 16) as u8);
	hs.push((len >> 8) as u8);
	hs.push(len as u8);
	hs.extend_from_slice(&body);

	let mut record = vec![0x16, 0x03, 0x01];
	push_u16(&mut record, hs.len() as u16);
	record.extend_from_slice(&hs);
	record
}

fn push_u16(buf: &mut Vec<u8>, val: u16) {
	buf.push((val >> 8) as u8);
	buf.push(val as u8);
}
