/// значения интервала; ширина выбирается при запекании - минимальная, в которую укладываются все значения интервала
#[derive(Debug, Clone, Copy)]
pub enum RangeValues<'a>
{
    U8(&'a [u8]),
    U16(&'a [u16]),
    I8(&'a [i8]),
    I16(&'a [i16]),
    I32(&'a [i32]),
}

impl<'a> RangeValues<'a>
{
    /// количество значений
    #[inline]
    pub fn len(&self) -> usize
    {
        match self {
            Self::U8(values) => values.len(),
            Self::U16(values) => values.len(),
            Self::I8(values) => values.len(),
            Self::I16(values) => values.len(),
            Self::I32(values) => values.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// значение по смещению от начала интервала
    #[inline(always)]
    pub fn get(&self, offset: usize) -> Option<i32>
    {
        match self {
            Self::U8(values) => values.get(offset).map(|&v| i32::from(v)),
            Self::U16(values) => values.get(offset).map(|&v| i32::from(v)),
            Self::I8(values) => values.get(offset).map(|&v| i32::from(v)),
            Self::I16(values) => values.get(offset).map(|&v| i32::from(v)),
            Self::I32(values) => values.get(offset).copied(),
        }
    }
}

/// интервал кодпоинтов start .. start + values.len() со своим массивом значений
#[derive(Debug, Clone, Copy)]
pub struct Range<'a>
{
    /// первый кодпоинт интервала
    pub start: u32,
    /// значения для каждого кодпоинта интервала
    pub values: RangeValues<'a>,
}

impl<'a> Range<'a>
{
    /// кодпоинт, следующий за последним кодпоинтом интервала
    #[inline]
    pub fn end(&self) -> u32
    {
        self.start + self.values.len() as u32
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        code >= self.start && code < self.end()
    }
}

/// таблица непересекающихся интервалов, отсортированных по возрастанию
///
/// используется там, где страницы получились бы слишком разреженными (цифры, расстояния регистра, ранги названий).
/// для кодпоинта вне интервалов значение не определено - что это значит (ошибка или значение по умолчанию),
/// решает использующий таблицу код.
#[derive(Debug, Clone, Copy)]
pub struct RangeTable<'a>
{
    pub ranges: &'a [Range<'a>],
}

impl<'a> RangeTable<'a>
{
    /// значение для кодпоинта, если кодпоинт попадает в один из интервалов
    #[inline]
    pub fn get(&self, code: u32) -> Option<i32>
    {
        // интервалы не пересекаются - достаточно найти последний, начинающийся не позже кодпоинта
        let position = self.ranges.partition_point(|range| range.start <= code);

        match position {
            0 => None,
            _ => {
                let range = &self.ranges[position - 1];

                range.values.get((code - range.start) as usize)
            }
        }
    }

    /// значение для кодпоинта, 0 - вне интервалов
    #[inline]
    pub fn get_or_zero(&self, code: u32) -> i32
    {
        self.get(code).unwrap_or(0)
    }

    /// значение для кодпоинта, где 0 внутри интервала также означает отсутствие значения
    #[inline]
    pub fn get_nonzero(&self, code: u32) -> Option<u32>
    {
        match self.get_or_zero(code) {
            0 => None,
            value => Some(value as u32),
        }
    }

    /// количество интервалов
    #[inline]
    pub fn len(&self) -> usize
    {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.ranges.is_empty()
    }

    /// количество кодпоинтов, покрытых интервалами
    pub fn covered(&self) -> usize
    {
        self.ranges.iter().map(|range| range.values.len()).sum()
    }
}
