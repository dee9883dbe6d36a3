use crate::{Error, Result};

// 码点按utf8编码。代理区及超出0x10FFFF的码点以U+FFFD替代，保证写入的内容始终是合法utf8。
#[inline]
pub fn encode_code_point(cp: u32, dst: &mut [u8; 4]) -> &[u8] {
    let c = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
    c.encode_utf8(dst).as_bytes()
}

// 按小端的utf16解析。奇数长度时，最后一个字节视为不完整的码元。
#[inline]
fn units(data: &[u8]) -> impl Iterator<Item = u16> + '_ {
    data.chunks_exact(2).map(|b| u16::from_le_bytes([b[0], b[1]]))
}

pub fn utf16_lossy(data: &[u8]) -> String {
    let mut s: String = char::decode_utf16(units(data))
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if data.len() % 2 == 1 {
        s.push(char::REPLACEMENT_CHARACTER);
    }
    s
}

pub fn utf16(data: &[u8]) -> Result<String> {
    let mut s = String::with_capacity(data.len() / 2);
    let mut at = 0;
    for c in char::decode_utf16(units(data)) {
        let c = c.map_err(|_| Error::Utf16 { at })?;
        at += c.len_utf16() * 2;
        s.push(c);
    }
    if data.len() % 2 == 1 {
        return Err(Error::Utf16 { at: data.len() - 1 });
    }
    Ok(s)
}
