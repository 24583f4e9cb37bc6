/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// начало блока завершающих согласных
pub const HANGUL_T_BASE: u32 = 0x11A8;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных (на 1 больше - с учетом отсутствующей)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = 588;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;

/// является-ли кодпоинт слогом хангыль
#[inline(always)]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// разбить слог на индексы ведущей согласной, гласной и завершающей согласной (0 - отсутствует)
#[inline]
pub fn split_syllable(code: u32) -> Option<(u32, u32, u32)>
{
    let s = code.wrapping_sub(HANGUL_S_BASE);

    match s < HANGUL_S_COUNT {
        true => Some((
            s / HANGUL_N_COUNT,
            (s % HANGUL_N_COUNT) / HANGUL_T_COUNT,
            s % HANGUL_T_COUNT,
        )),
        false => None,
    }
}

/// слог из индексов ведущей согласной, гласной и завершающей согласной
#[inline]
pub fn join_syllable(l: u32, v: u32, t: u32) -> u32
{
    debug_assert!(l < HANGUL_L_COUNT && v < HANGUL_V_COUNT && t < HANGUL_T_COUNT);

    HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_COUNT + t
}

/// декомпозиция слога хангыль на чамо: L V или L V T
pub fn decompose_hangul(code: u32) -> Option<Vec<u32>>
{
    let (l, v, t) = split_syllable(code)?;

    let mut result = vec![HANGUL_L_BASE + l, HANGUL_V_BASE + v];

    if t != 0 {
        result.push(HANGUL_T_BASE + t - 1);
    }

    Some(result)
}

/// комбинирование чамо хангыль: L + V, LV + T
pub fn compose_hangul(first: u32, second: u32) -> Option<u32>
{
    let l = first.wrapping_sub(HANGUL_L_BASE);

    // кодпоинт является ведущей согласной чамо
    if l < HANGUL_L_COUNT {
        let v = second.wrapping_sub(HANGUL_V_BASE);

        return match v < HANGUL_V_COUNT {
            true => Some(join_syllable(l, v, 0)),
            false => None,
        };
    }

    let lv = first.wrapping_sub(HANGUL_S_BASE);

    // первый кодпоинт - слог хангыль LV
    if lv < HANGUL_S_COUNT && lv % HANGUL_T_COUNT == 0 {
        let t = second.wrapping_sub(HANGUL_T_BASE);

        // второй кодпоинт - завершающая согласная
        if t < HANGUL_T_COUNT - 1 {
            return Some(first + t + 1);
        }
    }

    None
}
