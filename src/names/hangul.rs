use crate::normalization::hangul::{join_syllable, split_syllable};

/// префикс названий слогов хангыль
pub const HANGUL_PREFIX: &str = "HANGUL SYLLABLE ";

/// короткие названия ведущих согласных (L)
const JAMO_L: [&str; 19] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P", "H",
];

/// короткие названия гласных (V)
const JAMO_V: [&str; 21] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE", "WI", "YU", "EU",
    "YI", "I",
];

/// короткие названия завершающих согласных (T), первая - отсутствующая
const JAMO_T: [&str; 28] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M", "B", "BS", "S", "SS",
    "NG", "J", "C", "K", "T", "P", "H",
];

/// название слога хангыль, составленное из коротких названий чамо
pub fn name(code: u32) -> Option<String>
{
    let (l, v, t) = split_syllable(code)?;

    let mut result = String::with_capacity(HANGUL_PREFIX.len() + 8);

    result.push_str(HANGUL_PREFIX);
    result.push_str(JAMO_L[l as usize]);
    result.push_str(JAMO_V[v as usize]);
    result.push_str(JAMO_T[t as usize]);

    Some(result)
}

/// слог по названию без префикса: L, V и T разбираются по очереди, каждый раз - по самому длинному совпадению
pub fn lookup(syllable: &str) -> Option<u32>
{
    let (l, rest) = longest_prefix(&JAMO_L, syllable)?;
    let (v, rest) = longest_prefix(&JAMO_V, rest)?;
    let (t, rest) = longest_prefix(&JAMO_T, rest)?;

    match rest.is_empty() {
        true => Some(join_syllable(l, v, t)),
        false => None,
    }
}

/// индекс самого длинного короткого названия, с которого начинается строка, и остаток строки
#[inline]
fn longest_prefix<'s>(jamo: &[&str], source: &'s str) -> Option<(u32, &'s str)>
{
    jamo.iter()
        .enumerate()
        .filter(|(_, short)| source.starts_with(**short))
        .max_by_key(|(_, short)| short.len())
        .map(|(index, short)| (index as u32, &source[short.len() ..]))
}
