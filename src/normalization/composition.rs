use super::hangul::compose_hangul;
use crate::data::CompositionData;

impl<'a> CompositionData<'a>
{
    /// каноническая композиция пары стартер + комбинируемый кодпоинт
    ///
    /// исключения композиции в таблицу не попадают; чамо хангыль комбинируются алгоритмически
    #[inline]
    pub fn compose(&self, first: u32, second: u32) -> Option<u32>
    {
        if let Some(code) = compose_hangul(first, second) {
            return Some(code);
        }

        let left = self.first.get_nonzero(first)?;
        let right = self.second.get_nonzero(second)?;

        match self.compositions[(left * self.stride + right) as usize] {
            0 => None,
            code => Some(code),
        }
    }

    /// может-ли кодпоинт быть первым в паре
    #[inline]
    pub fn is_first(&self, code: u32) -> bool
    {
        self.first.get_nonzero(code).is_some()
    }

    /// может-ли кодпоинт быть вторым в паре
    #[inline]
    pub fn is_second(&self, code: u32) -> bool
    {
        self.second.get_nonzero(code).is_some()
    }

    /// количество комбинируемых пар (без хангыль)
    pub fn pairs_count(&self) -> usize
    {
        self.compositions.iter().filter(|&&code| code != 0).count()
    }
}
