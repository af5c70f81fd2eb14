/* src/grease.rs */

/// Check whether a `u16` value falls in the GREASE space of RFC 8701.
///
/// Both bytes must have `0xA` as their low nibble. The high nibbles are not
/// compared, so `0x1A2A` is dropped just like `0x1A1A`; this keeps hashes
/// identical to the JA3 implementations that mask with `0x0F0F`.
///
/// ```
/// assert!(ja3hello::is_grease(0x0A0A));
/// assert!(ja3hello::is_grease(0xFAFA));
/// assert!(!ja3hello::is_grease(0x1301));
/// ```
#[must_use]
pub const fn is_grease(value: u16) -> bool {
	(value & 0x0F0F) == 0x0A0A
}
