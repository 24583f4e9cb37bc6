/// тег декомпозиции
/// берется из UCD: 5 колонка UnicodeData.txt; декомпозиция с тегом - декомпозиция совместимости
/// в запеченной таблице хранится как значение + 1, 0 - каноническая декомпозиция
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font = 0,
    /// неразрывная версия пробела или дефиса
    NoBreak = 1,
    /// начальная форма представления (арабский)
    Initial = 2,
    /// средняя форма представления (арабский)
    Medial = 3,
    /// конечная форма представления (арабский)
    Final = 4,
    /// изолированная форма представления (арабский)
    Isolated = 5,
    /// окруженная форма
    Circle = 6,
    /// надстрочная форма
    Super = 7,
    /// подстрочная форма
    Sub = 8,
    /// вертикальная форма представления
    Vertical = 9,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide = 10,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow = 11,
    /// малая вариантная форма (совместимость CNS (Chinese National Standard))
    Small = 12,
    /// вариант шрифта в квадрате CJK
    Square = 13,
    /// форма обыкновенной дроби
    Fraction = 14,
    /// неопределенный символ для обеспечения совместимости
    Compat = 15,
}

impl DecompositionTag
{
    pub const ALL: [Self; 16] = [
        Self::Font,
        Self::NoBreak,
        Self::Initial,
        Self::Medial,
        Self::Final,
        Self::Isolated,
        Self::Circle,
        Self::Super,
        Self::Sub,
        Self::Vertical,
        Self::Wide,
        Self::Narrow,
        Self::Small,
        Self::Square,
        Self::Fraction,
        Self::Compat,
    ];

    /// тег из значения запеченной таблицы, None - каноническая декомпозиция
    #[inline]
    pub fn from_baked(value: u8) -> Option<Self>
    {
        match value {
            0 => None,
            _ => Self::ALL.get(value as usize - 1).copied(),
        }
    }

    /// тег в том виде, в котором он записан в UnicodeData.txt
    #[inline]
    pub fn as_str(&self) -> &'static str
    {
        match self {
            Self::Font => "<font>",
            Self::NoBreak => "<noBreak>",
            Self::Initial => "<initial>",
            Self::Medial => "<medial>",
            Self::Final => "<final>",
            Self::Isolated => "<isolated>",
            Self::Circle => "<circle>",
            Self::Super => "<super>",
            Self::Sub => "<sub>",
            Self::Vertical => "<vertical>",
            Self::Wide => "<wide>",
            Self::Narrow => "<narrow>",
            Self::Small => "<small>",
            Self::Square => "<square>",
            Self::Fraction => "<fraction>",
            Self::Compat => "<compat>",
        }
    }
}

impl TryFrom<&str> for DecompositionTag
{
    type Error = crate::properties::UnknownPropertyValue;

    #[inline]
    fn try_from(tag: &str) -> Result<Self, Self::Error>
    {
        Self::ALL
            .iter()
            .find(|value| value.as_str() == tag)
            .copied()
            .ok_or(crate::properties::UnknownPropertyValue)
    }
}

impl core::fmt::Display for DecompositionTag
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.as_str())
    }
}
