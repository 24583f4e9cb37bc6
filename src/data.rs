use crate::tables::{PageTable, Range, RangeTable, RangeValues};

/// версия Unicode, из которой запечены таблицы
pub const UNIDATA_VERSION: &str = "14.0.0";

/// свойства кодпоинтов. все колонки индексируются номером записи, полученным из records
pub struct PropertiesData<'a>
{
    /// номер записи для кодпоинта. запись 0 - неназначенный кодпоинт
    pub records: PageTable<'a, u16>,
    /// индекс в properties::CATEGORIES
    pub categories: &'a [u8],
    /// индекс в properties::BIDI_CLASSES, 0 - класс не задан
    pub bidi_classes: &'a [u8],
    /// индекс в properties::EAST_ASIAN_WIDTHS
    pub east_asian_widths: &'a [u8],
    /// флаги, см. properties::flags
    pub flags: &'a [u16],
    /// числовое значение, имеет смысл только при установленном флаге IS_NUMERIC
    pub numerics: &'a [f64],
    /// индекс в таблицах специальных преобразований регистра, 0xFFFF - отсутствует
    pub special_casing: &'a [u16],
    /// десятичные значения (флаг IS_DECIMAL)
    pub decimals: RangeTable<'a>,
    /// цифры (флаг IS_DIGIT)
    pub digits: RangeTable<'a>,
    /// класс канонического комбинирования
    pub combining_classes: PageTable<'a, u8>,
}

/// преобразование регистра
pub struct CasingData<'a>
{
    /// расстояния (кодпоинт - прописная буква), вне интервалов - 0
    pub uppercase: RangeTable<'a>,
    /// расстояния (кодпоинт - строчная буква)
    pub lowercase: RangeTable<'a>,
    /// расстояния (кодпоинт - заглавная буква)
    pub titlecase: RangeTable<'a>,
    /// отрезки пула для полных преобразований, по индексу специального преобразования.
    /// нулевая длина - используется простое преобразование
    pub special_uppercase: &'a [u32],
    pub special_lowercase: &'a [u32],
    pub special_titlecase: &'a [u32],
    /// нулевая длина - используется полное преобразование в строчные
    pub special_casefold: &'a [u32],
    pub special_pool: &'a [u32],
}

/// декомпозиция
pub struct DecompositionData<'a>
{
    /// номер записи декомпозиции, 0 - декомпозиции нет
    pub index: PageTable<'a, u16>,
    /// тег декомпозиции: 0 - каноническая, иначе DecompositionTag + 1
    pub tags: &'a [u8],
    /// декомпозиция в том виде, в котором она записана в UnicodeData.txt
    pub mappings: &'a [u32],
    /// полная каноническая декомпозиция (пустая для декомпозиций совместимости)
    pub canonical: &'a [u32],
    /// полная декомпозиция совместимости
    pub compatibility: &'a [u32],
    pub pool: &'a [u32],
}

/// комбинирование пар
pub struct CompositionData<'a>
{
    /// номер первого кодпоинта пары, 0 - не комбинируется
    pub first: RangeTable<'a>,
    /// номер второго кодпоинта пары, 0 - не комбинируется
    pub second: RangeTable<'a>,
    /// количество вторых кодпоинтов + 1
    pub stride: u32,
    /// результат комбинирования: first * stride + second, 0 - пара не комбинируется
    pub compositions: &'a [u32],
}

/// названия символов
pub struct NamesData<'a>
{
    /// начало каждого названия в NAME_LIST (+ конец списка)
    pub offsets: &'a [u32],
    /// ранг -> кодпоинт (в том числе - в зарезервированных областях псевдонимов и именованных последовательностей)
    pub codes: &'a [u32],
    /// кодпоинт -> ранг + 1, 0 - у кодпоинта нет названия
    pub positions: RangeTable<'a>,
    /// кодпоинты, на которые ссылаются псевдонимы
    pub aliases: &'a [u32],
    /// отрезки пула именованных последовательностей
    pub named_sequences: &'a [u32],
    pub named_sequences_pool: &'a [u32],
}

/// свойства кодпоинтов
pub static PROPERTIES: PropertiesData<'static> = include!("./../data/properties.rs.txt");

/// преобразование регистра
pub static CASING: CasingData<'static> = include!("./../data/casing.rs.txt");

/// декомпозиция
pub static DECOMPOSITION: DecompositionData<'static> = include!("./../data/decomposition.rs.txt");

/// комбинирование
pub static COMPOSITION: CompositionData<'static> = include!("./../data/composition.rs.txt");

/// названия: ранги, псевдонимы, последовательности
pub static NAMES: NamesData<'static> = include!("./../data/names.rs.txt");

/// отсортированные названия, по одному на строку
pub static NAME_LIST: &str = include_str!("./../data/names.txt");
