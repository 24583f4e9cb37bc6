use super::UnknownPropertyValue;

/// ширина символа в восточноазиатском тексте
/// берется из UCD: EastAsianWidth.txt, для отсутствующих там кодпоинтов - N
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum EastAsianWidth
{
    /// N - нейтральный, в восточноазиатской типографике не встречается
    Neutral = 0,
    /// Na - узкий, имеет полноширинный аналог
    Narrow = 1,
    /// A - неоднозначный: узкий или широкий в зависимости от контекста
    Ambiguous = 2,
    /// W - широкий
    Wide = 3,
    /// F - полноширинный, имеет узкий аналог
    Fullwidth = 4,
    /// H - полуширинный, имеет широкий аналог
    Halfwidth = 5,
}

/// обозначения, индекс - значение в запеченной таблице
pub const ABBREVIATIONS: [&str; 6] = ["N", "Na", "A", "W", "F", "H"];

impl EastAsianWidth
{
    pub const ALL: [Self; 6] = [
        Self::Neutral,
        Self::Narrow,
        Self::Ambiguous,
        Self::Wide,
        Self::Fullwidth,
        Self::Halfwidth,
    ];

    #[inline]
    pub fn abbr(&self) -> &'static str
    {
        ABBREVIATIONS[*self as usize]
    }

    /// занимает-ли символ две клетки моноширинного терминала (W, F)
    #[inline]
    pub fn is_wide(&self) -> bool
    {
        matches!(self, Self::Wide | Self::Fullwidth)
    }
}

impl TryFrom<&str> for EastAsianWidth
{
    type Error = UnknownPropertyValue;

    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        ABBREVIATIONS
            .iter()
            .position(|&value| value == abbr)
            .map(|position| Self::ALL[position])
            .ok_or(UnknownPropertyValue)
    }
}

impl TryFrom<u8> for EastAsianWidth
{
    type Error = UnknownPropertyValue;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        Self::ALL.get(value as usize).copied().ok_or(UnknownPropertyValue)
    }
}

impl core::fmt::Display for EastAsianWidth
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.abbr())
    }
}
