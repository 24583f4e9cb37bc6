use super::Case;
use crate::data::CasingData;

impl<'a> CasingData<'a>
{
    /// простое (однозначное) преобразование регистра
    ///
    /// в таблицах хранятся расстояния (кодпоинт - результат), для кодпоинтов вне интервалов расстояние - 0.
    /// ASCII в таблицы не попадает и обрабатывается здесь же.
    #[inline]
    pub fn simple(&self, code: u32, case: Case) -> u32
    {
        if code < 0x80 {
            return simple_ascii(code, case);
        }

        let table = match case {
            Case::Upper => &self.uppercase,
            Case::Lower => &self.lowercase,
            Case::Title => &self.titlecase,
        };

        match table.get_or_zero(code) {
            0 => code,
            distance => (code as i32 - distance) as u32,
        }
    }
}

/// преобразование регистра ASCII: заглавные и прописные латинские буквы совпадают
#[inline(always)]
fn simple_ascii(code: u32, case: Case) -> u32
{
    match case {
        Case::Upper | Case::Title => match code {
            0x61 ..= 0x7A => code - 0x20,
            _ => code,
        },
        Case::Lower => match code {
            0x41 ..= 0x5A => code + 0x20,
            _ => code,
        },
    }
}
