/// префикс названий унифицированных иероглифов CJK
pub const CJK_PREFIX: &str = "CJK UNIFIED IDEOGRAPH-";

/// блоки унифицированных иероглифов CJK (Unicode 14.0), включая расширения A - G
const CJK_RANGES: [(u32, u32); 8] = [
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2B738),
    (0x2B740, 0x2B81D),
    (0x2B820, 0x2CEA1),
    (0x2CEB0, 0x2EBE0),
    (0x30000, 0x3134A),
];

/// является-ли кодпоинт унифицированным иероглифом CJK
#[inline]
pub fn is_unified_ideograph(code: u32) -> bool
{
    CJK_RANGES.iter().any(|&(first, last)| (first ..= last).contains(&code))
}

/// название иероглифа: префикс + шестнадцатеричный код
pub fn name(code: u32) -> Option<String>
{
    match is_unified_ideograph(code) {
        true => Some(format!("{}{:04X}", CJK_PREFIX, code)),
        false => None,
    }
}

/// иероглиф по названию без префикса: 4 или 5 прописных шестнадцатеричных цифр, код должен попадать в блок CJK
pub fn lookup(hex: &str) -> Option<u32>
{
    if hex.len() != 4 && hex.len() != 5 {
        return None;
    }

    if !hex.bytes().all(|byte| matches!(byte, b'0' ..= b'9' | b'A' ..= b'F')) {
        return None;
    }

    let code = u32::from_str_radix(hex, 16).ok()?;

    match is_unified_ideograph(code) {
        true => Some(code),
        false => None,
    }
}
