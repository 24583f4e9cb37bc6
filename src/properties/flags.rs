//! биты колонки флагов. значение - u16, один набор флагов на запись свойств

/// пробельный символ (Zs, bidi WS / B / S)
pub const SPACE: u16 = 1 << 0;
/// буква (L)
pub const ALPHA: u16 = 1 << 1;
/// обязательный перенос строки (line break BK, CR, LF, NL или bidi B)
pub const LINEBREAK: u16 = 1 << 2;
/// прописная буква (Lu, Other_Uppercase)
pub const UPPER: u16 = 1 << 3;
/// заглавная буква (Lt)
pub const TITLE: u16 = 1 << 4;
/// строчная буква (Ll, Other_Lowercase)
pub const LOWER: u16 = 1 << 5;
/// у символа есть числовое значение
pub const NUMERIC: u16 = 1 << 6;
/// у символа есть значение цифры
pub const DIGIT: u16 = 1 << 7;
/// у символа есть десятичное значение
pub const DECIMAL: u16 = 1 << 8;
/// зеркальный символ двунаправленного текста
pub const MIRRORED: u16 = 1 << 9;
/// может начинать идентификатор
pub const XID_START: u16 = 1 << 10;
/// может продолжать идентификатор
pub const XID_CONTINUE: u16 = 1 << 11;
/// печатаемый символ: категория не из групп C и Z, либо пробел U+0020
pub const PRINTABLE: u16 = 1 << 12;
/// игнорируется при определении регистра (Case_Ignorable)
pub const CASE_IGNORABLE: u16 = 1 << 13;

/// символ имеет регистр
pub const CASED: u16 = UPPER | LOWER | TITLE;
