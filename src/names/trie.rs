/// словарь названий: название <-> ранг
///
/// ранг - плотный номер названия внутри словаря, с порядком кодпоинтов не связан.
/// соответствие ранга и кодпоинта хранится отдельно (NamesData::codes / NamesData::positions).
pub trait NameTrie
{
    /// ранг по названию, None - название неизвестно
    fn forward(&self, name: &str) -> Option<u32>;

    /// название по рангу, None - ранг не используется
    fn inverse(&self, rank: u32) -> Option<&str>;

    /// количество названий
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}

/// названия, отсортированные в байтовом порядке и записанные подряд, каждое - с переводом строки в конце
///
/// ранг - позиция названия в списке, прямой поиск - двоичный поиск по смещениям
#[derive(Debug, Clone, Copy)]
pub struct SortedNames<'a>
{
    /// список названий
    pub list: &'a str,
    /// смещение начала каждого названия + смещение конца списка
    pub offsets: &'a [u32],
}

impl<'a> SortedNames<'a>
{
    /// название с рангом rank, без перевода строки
    #[inline]
    fn name_at(&self, rank: usize) -> Option<&'a str>
    {
        let start = *self.offsets.get(rank)? as usize;
        let end = *self.offsets.get(rank + 1)? as usize;

        self.list.get(start .. end.checked_sub(1)?)
    }
}

impl<'a> NameTrie for SortedNames<'a>
{
    fn forward(&self, name: &str) -> Option<u32>
    {
        let ranks = self.offsets.len().saturating_sub(1);

        let (mut low, mut high) = (0, ranks);

        while low < high {
            let middle = (low + high) / 2;

            match self.name_at(middle)?.cmp(name) {
                core::cmp::Ordering::Less => low = middle + 1,
                core::cmp::Ordering::Greater => high = middle,
                core::cmp::Ordering::Equal => return Some(middle as u32),
            }
        }

        None
    }

    #[inline]
    fn inverse(&self, rank: u32) -> Option<&str>
    {
        self.name_at(rank as usize)
    }

    #[inline]
    fn len(&self) -> usize
    {
        self.offsets.len().saturating_sub(1)
    }
}
