use super::Case;
use crate::data::CasingData;
use crate::tables::span;

impl<'a> CasingData<'a>
{
    /// полное преобразование регистра: кодпоинт может превратиться в несколько кодпоинтов
    ///
    /// special - индекс специального преобразования из таблицы свойств. если его нет или список
    /// для нужного регистра пуст, результат - простое преобразование
    pub fn full(&self, code: u32, case: Case, special: Option<usize>) -> Vec<u32>
    {
        match self.special(case, special) {
            Some(codes) => codes.to_vec(),
            None => vec![self.simple(code, case)],
        }
    }

    /// свертка регистра. если свертка не задана явно - совпадает с полным преобразованием в строчные
    pub fn fold(&self, code: u32, special: Option<usize>) -> Vec<u32>
    {
        let folded = special
            .map(|index| span(self.special_pool, self.special_casefold[index]))
            .filter(|codes| !codes.is_empty());

        match folded {
            Some(codes) => codes.to_vec(),
            None => self.full(code, Case::Lower, special),
        }
    }

    /// непустой список специального преобразования
    #[inline]
    fn special(&self, case: Case, special: Option<usize>) -> Option<&'a [u32]>
    {
        let index = special?;

        let column = match case {
            Case::Upper => self.special_uppercase,
            Case::Lower => self.special_lowercase,
            Case::Title => self.special_titlecase,
        };

        let codes = span(self.special_pool, column[index]);

        match codes.is_empty() {
            true => None,
            false => Some(codes),
        }
    }

    /// количество специальных преобразований
    #[inline]
    pub fn special_count(&self) -> usize
    {
        self.special_uppercase.len()
    }
}
