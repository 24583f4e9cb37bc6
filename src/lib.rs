//! база символов Unicode: свойства кодпоинтов, регистр, декомпозиция и композиция, названия символов
//!
//! все таблицы запечены в бинарник и неизменяемы, любой запрос - чистая функция от аргументов.
//! кодпоинты за пределами 0 ..= 0x10FFFF - ошибка вызывающего кода.

pub use casing::Case;
pub use data::UNIDATA_VERSION;
pub use error::{NotFound, Result};
pub use names::LookupOptions;
pub use normalization::{DecompositionKind, DecompositionTag};
pub use properties::{BidiClass, EastAsianWidth, GeneralCategory};
pub use stats::TableStats;

use data::{CasingData, CompositionData, DecompositionData, NamesData, PropertiesData};
use names::Names;
use properties::flags;

pub mod casing;
pub mod data;
pub mod error;
pub mod names;
pub mod normalization;
pub mod properties;
pub mod stats;
pub mod tables;

/// база символов Unicode
#[derive(Clone, Copy)]
pub struct UnicodeDatabase<'a>
{
    /// свойства кодпоинтов
    properties: &'a PropertiesData<'a>,
    /// преобразование регистра
    casing: &'a CasingData<'a>,
    /// декомпозиция
    decomposition: &'a DecompositionData<'a>,
    /// композиция
    composition: &'a CompositionData<'a>,
    /// названия
    names: Names<'a>,
}

impl UnicodeDatabase<'static>
{
    /// база на запеченных таблицах
    pub fn new() -> Self
    {
        let database = Self::from_baked(
            &data::PROPERTIES,
            &data::CASING,
            &data::DECOMPOSITION,
            &data::COMPOSITION,
            &data::NAMES,
            data::NAME_LIST,
        );

        tracing::debug!(version = UNIDATA_VERSION, stats = %database.stats(), "unicode database loaded");

        database
    }
}

impl Default for UnicodeDatabase<'static>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<'a> UnicodeDatabase<'a>
{
    pub const fn from_baked(
        properties: &'a PropertiesData<'a>,
        casing: &'a CasingData<'a>,
        decomposition: &'a DecompositionData<'a>,
        composition: &'a CompositionData<'a>,
        names: &'a NamesData<'a>,
        name_list: &'a str,
    ) -> Self
    {
        Self {
            properties,
            casing,
            decomposition,
            composition,
            names: Names::new(names, name_list),
        }
    }

    /// версия Unicode
    pub fn version(&self) -> &'static str
    {
        UNIDATA_VERSION
    }

    /// размеры таблиц
    pub fn stats(&self) -> TableStats
    {
        TableStats {
            records: self.properties.records_count(),
            pages: self.properties.records.pages_count(),
            combining_class_pages: self.properties.combining_classes.pages_count(),
            decompositions: self.decomposition.records_count(),
            decomposition_pages: self.decomposition.index.pages_count(),
            compositions: self.composition.pairs_count(),
            special_casing: self.casing.special_count(),
            names: self.names.len(),
            aliases: self.names.aliases_count(),
            named_sequences: self.names.named_sequences_count(),
        }
    }

    // свойства

    /// основная категория, двухбуквенное обозначение
    #[inline]
    pub fn category(&self, code: u32) -> &'static str
    {
        self.properties.category_abbr(code)
    }

    /// основная категория
    #[inline]
    pub fn general_category(&self, code: u32) -> GeneralCategory
    {
        self.properties.category(code)
    }

    /// класс направления, пустая строка для неназначенных кодпоинтов
    #[inline]
    pub fn bidirectional(&self, code: u32) -> &'static str
    {
        self.properties.bidi_class_abbr(code)
    }

    /// класс направления
    #[inline]
    pub fn bidi_class(&self, code: u32) -> Option<BidiClass>
    {
        self.properties.bidi_class(code)
    }

    /// ширина символа в восточноазиатском тексте: N, Na, A, W, F или H
    #[inline]
    pub fn east_asian_width(&self, code: u32) -> &'static str
    {
        self.properties.east_asian_width(code).abbr()
    }

    #[inline]
    pub fn east_asian_width_value(&self, code: u32) -> EastAsianWidth
    {
        self.properties.east_asian_width(code)
    }

    #[inline]
    pub fn is_space(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::SPACE)
    }

    #[inline]
    pub fn is_alpha(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::ALPHA)
    }

    /// буква или символ с числовым значением
    #[inline]
    pub fn is_alnum(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::ALPHA | flags::NUMERIC)
    }

    /// обязательный перенос строки
    #[inline]
    pub fn is_linebreak(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::LINEBREAK)
    }

    #[inline]
    pub fn is_upper(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::UPPER)
    }

    #[inline]
    pub fn is_lower(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::LOWER)
    }

    #[inline]
    pub fn is_title(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::TITLE)
    }

    /// символ имеет регистр
    #[inline]
    pub fn is_cased(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::CASED)
    }

    #[inline]
    pub fn is_decimal(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::DECIMAL)
    }

    #[inline]
    pub fn is_digit(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::DIGIT)
    }

    #[inline]
    pub fn is_numeric(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::NUMERIC)
    }

    #[inline]
    pub fn is_printable(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::PRINTABLE)
    }

    #[inline]
    pub fn is_case_ignorable(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::CASE_IGNORABLE)
    }

    #[inline]
    pub fn is_xid_start(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::XID_START)
    }

    #[inline]
    pub fn is_xid_continue(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::XID_CONTINUE)
    }

    #[inline]
    pub fn is_mirrored(&self, code: u32) -> bool
    {
        self.properties.has(code, flags::MIRRORED)
    }

    /// десятичное значение, только для is_decimal
    #[inline]
    pub fn decimal(&self, code: u32) -> Result<u32>
    {
        self.properties.decimal(code)
    }

    /// значение цифры, только для is_digit
    #[inline]
    pub fn digit(&self, code: u32) -> Result<u32>
    {
        self.properties.digit(code)
    }

    /// числовое значение, только для is_numeric
    #[inline]
    pub fn numeric(&self, code: u32) -> Result<f64>
    {
        self.properties.numeric(code)
    }

    // регистр

    #[inline]
    pub fn to_upper(&self, code: u32) -> u32
    {
        self.casing.simple(code, Case::Upper)
    }

    #[inline]
    pub fn to_lower(&self, code: u32) -> u32
    {
        self.casing.simple(code, Case::Lower)
    }

    #[inline]
    pub fn to_title(&self, code: u32) -> u32
    {
        self.casing.simple(code, Case::Title)
    }

    /// полное преобразование в прописные: U+00DF (ß) -> SS
    pub fn to_upper_full(&self, code: u32) -> Vec<u32>
    {
        self.casing.full(code, Case::Upper, self.special_casing(code))
    }

    pub fn to_lower_full(&self, code: u32) -> Vec<u32>
    {
        self.casing.full(code, Case::Lower, self.special_casing(code))
    }

    pub fn to_title_full(&self, code: u32) -> Vec<u32>
    {
        self.casing.full(code, Case::Title, self.special_casing(code))
    }

    /// свертка регистра для сравнения без учета регистра
    pub fn case_fold(&self, code: u32) -> Vec<u32>
    {
        self.casing.fold(code, self.special_casing(code))
    }

    /// у ASCII специальных преобразований нет
    #[inline(always)]
    fn special_casing(&self, code: u32) -> Option<usize>
    {
        match code < 0x80 {
            true => None,
            false => self.properties.special_casing(code),
        }
    }

    // названия

    /// кодпоинт по названию; псевдонимы и именованные последовательности не учитываются
    #[inline]
    pub fn lookup(&self, name: &str) -> Result<u32>
    {
        self.names.lookup(name, LookupOptions::default())
    }

    /// кодпоинт по названию с параметрами поиска
    #[inline]
    pub fn lookup_with(&self, name: &str, options: LookupOptions) -> Result<u32>
    {
        self.names.lookup(name, options)
    }

    /// название символа
    #[inline]
    pub fn name(&self, code: u32) -> Result<String>
    {
        self.names.name(code)
    }

    /// именованная последовательность по кодпоинту, полученному из lookup_with
    pub fn lookup_named_sequence(&self, code: u32) -> Option<String>
    {
        self.names
            .named_sequence(code)
            .map(|codes| codes.iter().filter_map(|&code| char::from_u32(code)).collect())
    }

    // нормализация

    /// декомпозиция в том виде, в котором она записана в UnicodeData.txt: "<compat> 0020 0301"
    #[inline]
    pub fn decomposition(&self, code: u32) -> String
    {
        self.decomposition.text(code)
    }

    /// тег декомпозиции совместимости
    #[inline]
    pub fn decomposition_tag(&self, code: u32) -> Option<DecompositionTag>
    {
        self.decomposition.tag(code)
    }

    /// полная каноническая декомпозиция, пустая - если кодпоинт канонически не раскладывается
    #[inline]
    pub fn canonical_decomposition(&self, code: u32) -> Vec<u32>
    {
        self.decomposition.decompose(code, DecompositionKind::Canonical)
    }

    /// полная декомпозиция совместимости, пустая - если кодпоинт не раскладывается
    #[inline]
    pub fn compatibility_decomposition(&self, code: u32) -> Vec<u32>
    {
        self.decomposition.decompose(code, DecompositionKind::Compatibility)
    }

    /// класс канонического комбинирования
    #[inline]
    pub fn combining_class(&self, code: u32) -> u8
    {
        self.properties.combining_class(code)
    }

    /// каноническая композиция пары
    #[inline]
    pub fn compose(&self, first: u32, second: u32) -> Result<u32>
    {
        self.composition
            .compose(first, second)
            .ok_or(NotFound::Pair(first, second))
    }
}
