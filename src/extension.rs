/* src/extension.rs */

use alloc::vec::Vec;

use crate::Error;
use crate::grease::is_grease;
use crate::reader::Reader;

/// Server Name Indication.
pub(crate) const SERVER_NAME: u16 = 0x0000;
/// Supported Groups, formerly Elliptic Curves.
pub(crate) const SUPPORTED_GROUPS: u16 = 0x000a;
/// EC Point Formats.
pub(crate) const EC_POINT_FORMATS: u16 = 0x000b;

const SNI_HOST_NAME: u8 = 0x00;
/// Offset of the hostname within the SNI extension content.
const SNI_NAME_OFFSET: usize = 5;

/// Fields collected while walking the extensions block.
#[derive(Debug, Default)]
pub(crate) struct ExtensionFields<'a> {
	pub(crate) types: Vec<u16>,
	pub(crate) sni: Option<&'a [u8]>,
	pub(crate) supported_curves: Vec<u16>,
	pub(crate) ec_point_formats: Vec<u8>,
}

/// Walk an extensions block record by record until it is exhausted.
pub(crate) fn parse_extensions(block: &[u8]) -> Result<ExtensionFields<'_>, Error> {
	let mut r = Reader::new(block);
	let mut fields = ExtensionFields::default();
	while !r.is_empty() {
		let type_id = r.read_u16("extension type")?;
		let ext_len = r.read_u16("extension length")? as usize;
		let data = r.read_bytes(ext_len, "extension body")?;
		if !is_grease(type_id) {
			fields.types.push(type_id);
		}
		match type_id {
			SERVER_NAME => fields.sni = Some(parse_sni(data)?),
			SUPPORTED_GROUPS => parse_groups(data, &mut fields.supported_curves)?,
			EC_POINT_FORMATS => parse_ec_point_formats(data, &mut fields.ec_point_formats)?,
			_ => {}
		}
	}
	Ok(fields)
}

// Layout: list length (2), entry type (1), name length (2), name. Only the
// byte at index 3 is checked and the name runs to the end of the content.
fn parse_sni(data: &[u8]) -> Result<&[u8], Error> {
	if data.len() < SNI_NAME_OFFSET {
		return Err(Error::Truncated { field: "SNI entry" });
	}
	if data[3] != SNI_HOST_NAME {
		return Err(Error::InvalidSniEntryType(data[3]));
	}
	Ok(&data[SNI_NAME_OFFSET..])
}

fn parse_groups(data: &[u8], curves: &mut Vec<u16>) -> Result<(), Error> {
	let mut r = Reader::new(data);
	let list_len = r.read_u16("supported groups length")? as usize;
	// Bytes after the declared list are ignored, an odd last byte too.
	let list = r.read_bytes(list_len, "supported groups")?;
	let mut inner = Reader::new(list);
	while inner.remaining() >= 2 {
		let group = inner.read_u16("supported group")?;
		if !is_grease(group) {
			curves.push(group);
		}
	}
	Ok(())
}

fn parse_ec_point_formats(data: &[u8], formats: &mut Vec<u8>) -> Result<(), Error> {
	if data.len() < 2 {
		return Err(Error::InvalidEcpf { len: data.len() });
	}
	let mut r = Reader::new(data);
	let count = r.read_u8("EC point formats length")? as usize;
	formats.extend_from_slice(r.read_bytes(count, "EC point formats")?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(type_id: u16, data: &[u8]) -> Vec<u8> {
		let mut out = Vec::new();
		out.extend_from_slice(&type_id.to_be_bytes());
		out.extend_from_slice(&(data.len() as u16).to_be_bytes());
		out.extend_from_slice(data);
		out
	}

	#[test]
	fn sni_hostname_runs_to_end_of_content() {
		let data = [0x00, 0x0a, 0x00, 0x00, 0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e'];
		assert_eq!(parse_sni(&data).unwrap(), b"example");
	}

	#[test]
	fn sni_rejects_non_dns_entry() {
		let data = [0x00, 0x05, 0x00, 0x01, 0x02, b'h', b'i'];
		assert_eq!(parse_sni(&data), Err(Error::InvalidSniEntryType(0x01)));
	}

	#[test]
	fn sni_too_short() {
		assert_eq!(
			parse_sni(&[0x00, 0x01, 0x00, 0x00]),
			Err(Error::Truncated { field: "SNI entry" })
		);
	}

	#[test]
	fn empty_sni_name() {
		assert_eq!(parse_sni(&[0x00, 0x03, 0x00, 0x00, 0x00]).unwrap(), b"");
	}

	#[test]
	fn groups_stop_at_declared_length() {
		let mut curves = Vec::new();
		// Declares 2 bytes but carries three groups.
		parse_groups(&[0x00, 0x02, 0x00, 0x1d, 0x00, 0x17, 0x00, 0x18], &mut curves).unwrap();
		assert_eq!(curves, [0x001d]);
	}

	#[test]
	fn groups_declared_length_past_content() {
		let mut curves = Vec::new();
		assert_eq!(
			parse_groups(&[0x00, 0x06, 0x00, 0x1d, 0x00, 0x17], &mut curves),
			Err(Error::Truncated {
				field: "supported groups"
			})
		);
	}

	#[test]
	fn groups_drop_grease_and_trailing_byte() {
		let mut curves = Vec::new();
		parse_groups(&[0x00, 0x07, 0xAA, 0xAA, 0x00, 0x1d, 0x1A, 0x1A, 0x00], &mut curves).unwrap();
		assert_eq!(curves, [0x001d]);
	}

	#[test]
	fn ec_point_formats_short_content() {
		let mut formats = Vec::new();
		assert_eq!(
			parse_ec_point_formats(&[0x01], &mut formats),
			Err(Error::InvalidEcpf { len: 1 })
		);
	}

	#[test]
	fn ec_point_formats_count_exceeds_content() {
		let mut formats = Vec::new();
		assert_eq!(
			parse_ec_point_formats(&[0x03, 0x00, 0x01], &mut formats),
			Err(Error::Truncated {
				field: "EC point formats"
			})
		);
	}

	#[test]
	fn walks_records_in_wire_order() {
		let mut block = record(0x1A1A, &[]);
		block.extend(record(0x0017, &[]));
		block.extend(record(SUPPORTED_GROUPS, &[0x00, 0x04, 0x0A, 0x0A, 0x00, 0x1d]));
		block.extend(record(EC_POINT_FORMATS, &[0x02, 0x00, 0x01]));
		block.extend(record(0xFAFA, &[0x00]));
		let fields = parse_extensions(&block).unwrap();
		assert_eq!(fields.types, [0x0017, 0x000a, 0x000b]);
		assert_eq!(fields.supported_curves, [0x001d]);
		assert_eq!(fields.ec_point_formats, [0x00, 0x01]);
		assert!(fields.sni.is_none());
	}

	#[test]
	fn record_longer_than_block() {
		let mut block = record(0x0017, &[0x00, 0x00]);
		block.truncate(block.len() - 1);
		assert_eq!(
			parse_extensions(&block).unwrap_err(),
			Error::Truncated {
				field: "extension body"
			}
		);
	}

	#[test]
	fn dangling_byte_after_last_record() {
		let mut block = record(0x0017, &[]);
		block.push(0x00);
		assert_eq!(
			parse_extensions(&block).unwrap_err(),
			Error::Truncated {
				field: "extension type"
			}
		);
	}
}
