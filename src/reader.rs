/* src/reader.rs */

use crate::Error;

/// Forward-only cursor over a byte slice. Every read is bounds checked and
/// reports the field it was reading when the slice runs out.
pub(crate) struct Reader<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Reader<'a> {
	pub(crate) fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	pub(crate) fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	pub(crate) fn read_u8(&mut self, field: &'static str) -> Result<u8, Error> {
		let [val] = self.read_array::<1>(field)?;
		Ok(val)
	}

	pub(crate) fn read_u16(&mut self, field: &'static str) -> Result<u16, Error> {
		Ok(u16::from_be_bytes(self.read_array(field)?))
	}

	pub(crate) fn read_u24(&mut self, field: &'static str) -> Result<u32, Error> {
		let [a, b, c] = self.read_array(field)?;
		Ok(u32::from_be_bytes([0, a, b, c]))
	}

	pub(crate) fn read_bytes(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], Error> {
		if self.remaining() < n {
			return Err(Error::Truncated { field });
		}
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	/// Skip `n` bytes without looking at them.
	pub(crate) fn skip(&mut self, n: usize, field: &'static str) -> Result<(), Error> {
		self.read_bytes(n, field).map(|_| ())
	}

	fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], Error> {
		let bytes = self.read_bytes(N, field)?;
		let mut out = [0u8; N];
		out.copy_from_slice(bytes);
		Ok(out)
	}
}
