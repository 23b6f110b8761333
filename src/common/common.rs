use std::fmt;
use std::fmt::Formatter;

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
    let mut chars = [0u8; 40];
    for (i, &byte) in data.iter().enumerate() {
        let idx = i * 2;
        chars[idx] = HEX_CHARS[(byte >> 4) as usize];
        chars[idx + 1] = HEX_CHARS[(byte & 0xf) as usize];
    }
    write!(f, "{}", std::str::from_utf8(&chars).unwrap_or_default())
}
