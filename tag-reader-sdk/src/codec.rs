/// Separator placed between byte groups of a formatted tag identifier.
pub const GROUP_SEPARATOR: char = ':';

/// Stateless conversions between raw tag UIDs and their textual forms.
pub struct TagIdCodec;

impl TagIdCodec {
    /// Encode bytes as contiguous uppercase hex, two digits per byte.
    ///
    /// Total: an empty slice encodes to an empty string.
    #[inline]
    pub fn encode_hex(bytes: &[u8]) -> String {
        hex::encode_upper(bytes)
    }

    /// Split a hex string into two-character groups joined by `:`.
    ///
    /// Input is not validated. Odd-length or non-hex input is grouped
    /// positionally and a trailing single character becomes its own group,
    /// so `"ABC"` formats as `"AB:C"`.
    pub fn format_grouped(hex: &str) -> String {
        let chars: Vec<char> = hex.chars().collect();
        let mut formatted = String::with_capacity(chars.len() + chars.len() / 2);
        for (i, group) in chars.chunks(2).enumerate() {
            if i > 0 {
                formatted.push(GROUP_SEPARATOR);
            }
            formatted.extend(group);
        }
        formatted
    }

    /// Both textual forms of a UID in one pass.
    #[inline]
    pub fn encode_pair(bytes: &[u8]) -> (String, String) {
        let hex = Self::encode_hex(bytes);
        let grouped = Self::format_grouped(&hex);
        (hex, grouped)
    }
}
