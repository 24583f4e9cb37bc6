use super::UnknownPropertyValue;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt
/// 30 вариантов, порядок совпадает с порядком категорий в запеченной таблице
///
/// общие категории:
///     LC (Lu, Ll, Lt) - буквы, имеющие регистр
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом.
    /// дефолтный вариант при отсутствии записи о символе в UCD
    Unassigned = 0,

    /// Lu - прописная буква
    UppercaseLetter = 1,
    /// Ll - строчная буква
    LowercaseLetter = 2,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3,
    /// Lm - буква-модификатор
    ModifierLetter = 4,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 6,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8,

    /// Nd - десятичная цифра
    DecimalNumber = 9,
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10,
    /// No - прочие числовые символы
    OtherNumber = 11,

    /// Zs - разделитель-пробел
    SpaceSeparator = 12,
    /// Zl - разделитель строки
    LineSeparator = 13,
    /// Zp - разделитель параграфов
    ParagraphSeparator = 14,

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 15,
    /// Cf - управляющий символ форматирования
    Format = 16,
    /// Cs - символ-суррогат
    Surrogate = 17,
    /// Co - символ для приватного использования
    PrivateUse = 18,

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 19,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 20,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 21,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 22,
    /// Pi - начальный знак цитаты
    InitialPunctuation = 23,
    /// Pf - конечный знак цитаты
    FinalPunctuation = 24,
    /// Po - знак препинания другого типа
    OtherPunctuation = 25,

    /// Sm - математический символ
    MathSymbol = 26,
    /// Sc - символ валюты
    CurrencySymbol = 27,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 28,
    /// So - прочие символы
    OtherSymbol = 29,
}

impl GeneralCategory
{
    /// все варианты в порядке значений
    pub const ALL: [Self; 30] = [
        Self::Unassigned,
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
    ];

    /// двухбуквенное обозначение категории
    #[inline]
    pub fn abbr(&self) -> &'static str
    {
        ABBREVIATIONS[*self as usize]
    }

    /// относится-ли категория к буквам с регистром (LC)
    #[inline]
    pub fn is_cased_letter(&self) -> bool
    {
        matches!(*self as u8, 1 ..= 3)
    }

    /// относится-ли категория к буквам (L)
    #[inline]
    pub fn is_letter(&self) -> bool
    {
        matches!(*self as u8, 1 ..= 5)
    }

    /// относится-ли категория к комбинирующим символам (M)
    #[inline]
    pub fn is_combining_mark(&self) -> bool
    {
        matches!(*self as u8, 6 ..= 8)
    }

    /// относится-ли категория к цифрам и числовым символам (N)
    #[inline]
    pub fn is_numeric(&self) -> bool
    {
        matches!(*self as u8, 9 ..= 11)
    }

    /// относится-ли категория к разделителям (Z)
    #[inline]
    pub fn is_separator(&self) -> bool
    {
        matches!(*self as u8, 12 ..= 14)
    }

    /// относится-ли категория к управляющим символам (или не назначена) (C)
    #[inline]
    pub fn is_control(&self) -> bool
    {
        self.is_unassigned() || matches!(*self as u8, 15 ..= 18)
    }

    /// категория не назначена (Cn)
    #[inline]
    pub fn is_unassigned(&self) -> bool
    {
        *self == Self::Unassigned
    }

    /// относится-ли категория к пунктуации (P)
    #[inline]
    pub fn is_punctuation(&self) -> bool
    {
        matches!(*self as u8, 19 ..= 25)
    }

    /// относится-ли категория к символам (S)
    #[inline]
    pub fn is_symbol(&self) -> bool
    {
        matches!(*self as u8, 26 ..= 29)
    }
}

/// обозначения категорий, индекс - значение категории в запеченной таблице
pub const ABBREVIATIONS: [&str; 30] = [
    "Cn", "Lu", "Ll", "Lt", "Lm", "Lo", "Mn", "Mc", "Me", "Nd", "Nl", "No", "Zs", "Zl", "Zp", "Cc", "Cf", "Cs", "Co",
    "Pc", "Pd", "Ps", "Pe", "Pi", "Pf", "Po", "Sm", "Sc", "Sk", "So",
];

impl TryFrom<&str> for GeneralCategory
{
    type Error = UnknownPropertyValue;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        match abbr {
            "" => Ok(Self::Unassigned),
            _ => ABBREVIATIONS
                .iter()
                .position(|&value| value == abbr)
                .map(|position| Self::ALL[position])
                .ok_or(UnknownPropertyValue),
        }
    }
}

impl TryFrom<u8> for GeneralCategory
{
    type Error = UnknownPropertyValue;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        Self::ALL.get(value as usize).copied().ok_or(UnknownPropertyValue)
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for GeneralCategory
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.abbr())
    }
}
