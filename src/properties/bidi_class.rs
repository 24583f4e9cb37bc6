use super::UnknownPropertyValue;

/// класс направления текста (bidi class)
/// берется из UCD: четвертая колонка UnicodeData.txt
/// 23 варианта; значение 0 в запеченной таблице - класс не задан (неназначенный кодпоинт)
///
/// группы классов:
///     strong (L, R, AL) - сильный тип направления - символы, которые имеют явно заданное направление
///     weak (EN, ES, ET, AN, CS, NSM, BN) - слабый тип направления - символы, направление которых зависит от контекста
///     neutral (B, S, WS, ON) - нейтральные типы - символы, не имеющие определенного направления
///     explicit (LRE, LRO, RLE, RLO, PDF, LRI, RLI, FSI, PDI) - явные типы форматирования
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum BidiClass
{
    /// L - любой сильный LTR-символ
    LeftToRight = 1,
    /// R - любой сильный (не арабский) RTL-символ
    RightToLeft = 2,
    /// AL - любой сильный (арабский) RTL-символ
    ArabicLetter = 3,

    /// EN - любая цифра ASCII или восточно-арабская индийская цифра
    EuropeanNumber = 4,
    /// ES - знаки плюса и минуса
    EuropeanSeparator = 5,
    /// ET - терминатор в контексте числового формата, включает символы валюты
    EuropeanTerminator = 6,
    /// AN - любая арабско-индийская цифра
    ArabicNumber = 7,
    /// CS - запятые, двоеточия и слеши
    CommonSeparator = 8,
    /// NSM - не занимающий места символ, не оказывающий влияния на направление текста
    NonspacingMark = 9,
    /// BN - большинство символов форматирования, управляющие коды или недопустимые символы
    BoundaryNeutral = 10,

    /// B - различные символы новой строки, которые разделяют абзацы
    ParagraphSeparator = 11,
    /// S - различные управляющие коды, связанные с сегментами текста
    SegmentSeparator = 12,
    /// WS - пробельные символы, такие как пробелы и табуляции
    Whitespace = 13,
    /// ON - большинство других символов и знаков пунктуации
    OtherNeutral = 14,

    /// LRE - U+202A - символ вставки слева направо (LR embedding control)
    LeftToRightEmbedding = 15,
    /// LRO - U+202D - символ переопределения слева направо (LR override control)
    LeftToRightOverride = 16,
    /// RLE - U+202B - символ вставки справа налево (RL embedding control)
    RightToLeftEmbedding = 17,
    /// RLO - U+202E - символ переопределения справа налево (RL override control)
    RightToLeftOverride = 18,
    /// PDF - U+202C - символ окончания направляющего форматирования (pop directional format)
    PopDirectionalFormat = 19,
    /// LRI - U+2066 - символ изоляции слева направо (LR isolate control)
    LeftToRightIsolate = 20,
    /// RLI - U+2067 - символ изоляции справа налево (RL isolate control)
    RightToLeftIsolate = 21,
    /// FSI - U+2068 - символ первой сильной изоляции (first strong isolate control)
    FirstStrongIsolate = 22,
    /// PDI - U+2069 - символ окончания изоляции направления (pop directional isolate)
    PopDirectionalIsolate = 23,
}

/// обозначения классов, индекс - значение в запеченной таблице (0 - класс не задан)
pub const ABBREVIATIONS: [&str; 24] = [
    "", "L", "R", "AL", "EN", "ES", "ET", "AN", "CS", "NSM", "BN", "B", "S", "WS", "ON", "LRE", "LRO", "RLE", "RLO",
    "PDF", "LRI", "RLI", "FSI", "PDI",
];

impl BidiClass
{
    /// все варианты, начиная со значения 1
    pub const ALL: [Self; 23] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::ArabicLetter,
        Self::EuropeanNumber,
        Self::EuropeanSeparator,
        Self::EuropeanTerminator,
        Self::ArabicNumber,
        Self::CommonSeparator,
        Self::NonspacingMark,
        Self::BoundaryNeutral,
        Self::ParagraphSeparator,
        Self::SegmentSeparator,
        Self::Whitespace,
        Self::OtherNeutral,
        Self::LeftToRightEmbedding,
        Self::LeftToRightOverride,
        Self::RightToLeftEmbedding,
        Self::RightToLeftOverride,
        Self::PopDirectionalFormat,
        Self::LeftToRightIsolate,
        Self::RightToLeftIsolate,
        Self::FirstStrongIsolate,
        Self::PopDirectionalIsolate,
    ];

    /// обозначение класса
    #[inline]
    pub fn abbr(&self) -> &'static str
    {
        ABBREVIATIONS[*self as usize]
    }

    /// является-ли сильным типом направления
    #[inline]
    pub fn is_strong(&self) -> bool
    {
        matches!(*self as u8, 1 ..= 3)
    }

    /// является-ли слабым типом направления
    #[inline]
    pub fn is_weak(&self) -> bool
    {
        matches!(*self as u8, 4 ..= 10)
    }

    /// является-ли нейтральным типом
    #[inline]
    pub fn is_neutral(&self) -> bool
    {
        matches!(*self as u8, 11 ..= 14)
    }

    /// является-ли явным типом
    #[inline]
    pub fn is_explicit(&self) -> bool
    {
        matches!(*self as u8, 15 ..= 23)
    }
}

impl TryFrom<&str> for BidiClass
{
    type Error = UnknownPropertyValue;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        match abbr {
            "" => Err(UnknownPropertyValue),
            _ => ABBREVIATIONS
                .iter()
                .position(|&value| value == abbr)
                .map(|position| Self::ALL[position - 1])
                .ok_or(UnknownPropertyValue),
        }
    }
}

impl TryFrom<u8> for BidiClass
{
    type Error = UnknownPropertyValue;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        match value {
            0 => Err(UnknownPropertyValue),
            _ => Self::ALL.get(value as usize - 1).copied().ok_or(UnknownPropertyValue),
        }
    }
}

impl From<BidiClass> for u8
{
    #[inline]
    fn from(value: BidiClass) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for BidiClass
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.abbr())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn abbreviations()
    {
        for class in BidiClass::ALL {
            assert_eq!(BidiClass::try_from(class.abbr()), Ok(class));
            assert_eq!(BidiClass::try_from(u8::from(class)), Ok(class));
        }

        assert!(BidiClass::try_from(0).is_err());
        assert!(BidiClass::try_from(24).is_err());
        assert!(BidiClass::try_from("").is_err());
    }

    #[test]
    fn groups()
    {
        assert!(BidiClass::ArabicLetter.is_strong());
        assert!(BidiClass::BoundaryNeutral.is_weak());
        assert!(BidiClass::OtherNeutral.is_neutral());
        assert!(BidiClass::PopDirectionalIsolate.is_explicit());
        assert!(!BidiClass::ParagraphSeparator.is_explicit());
    }
}
