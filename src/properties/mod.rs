mod bidi_class;
mod east_asian_width;
mod general_category;

pub mod flags;

pub use bidi_class::BidiClass;
pub use east_asian_width::EastAsianWidth;
pub use general_category::GeneralCategory;

use crate::data::PropertiesData;
use crate::error::{NotFound, Result};

/// обозначения основных категорий в порядке значений запеченной таблицы
pub use general_category::ABBREVIATIONS as CATEGORIES;
/// обозначения классов направления, 0 - пустая строка
pub use bidi_class::ABBREVIATIONS as BIDI_CLASSES;
/// обозначения ширины символа
pub use east_asian_width::ABBREVIATIONS as EAST_ASIAN_WIDTHS;

/// значение в запеченной таблице не соответствует ни одному варианту свойства
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown property value")]
pub struct UnknownPropertyValue;

/// отсутствие специального преобразования регистра
pub const NO_SPECIAL_CASING: u16 = 0xFFFF;

impl<'a> PropertiesData<'a>
{
    /// номер записи свойств кодпоинта (infoIndex)
    #[inline(always)]
    pub fn record(&self, code: u32) -> usize
    {
        self.records.get(code) as usize
    }

    /// флаги кодпоинта
    #[inline(always)]
    pub fn flags(&self, code: u32) -> u16
    {
        self.flags[self.record(code)]
    }

    /// установлен-ли у кодпоинта хотя бы один из флагов маски
    #[inline(always)]
    pub fn has(&self, code: u32, mask: u16) -> bool
    {
        self.flags(code) & mask != 0
    }

    /// основная категория
    #[inline]
    pub fn category(&self, code: u32) -> GeneralCategory
    {
        let value = self.categories[self.record(code)];

        GeneralCategory::try_from(value).unwrap_or(GeneralCategory::Unassigned)
    }

    /// обозначение основной категории
    #[inline]
    pub fn category_abbr(&self, code: u32) -> &'static str
    {
        CATEGORIES[self.categories[self.record(code)] as usize]
    }

    /// класс направления, None - не задан
    #[inline]
    pub fn bidi_class(&self, code: u32) -> Option<BidiClass>
    {
        BidiClass::try_from(self.bidi_classes[self.record(code)]).ok()
    }

    /// обозначение класса направления, пустая строка - не задан
    #[inline]
    pub fn bidi_class_abbr(&self, code: u32) -> &'static str
    {
        BIDI_CLASSES[self.bidi_classes[self.record(code)] as usize]
    }

    /// ширина символа в восточноазиатском тексте
    #[inline]
    pub fn east_asian_width(&self, code: u32) -> EastAsianWidth
    {
        EastAsianWidth::try_from(self.east_asian_widths[self.record(code)]).unwrap_or(EastAsianWidth::Neutral)
    }

    /// десятичное значение
    pub fn decimal(&self, code: u32) -> Result<u32>
    {
        match self.has(code, flags::DECIMAL) {
            true => self.decimals.get(code).map(|value| value as u32).ok_or(NotFound::Codepoint(code)),
            false => Err(NotFound::Codepoint(code)),
        }
    }

    /// значение цифры
    pub fn digit(&self, code: u32) -> Result<u32>
    {
        match self.has(code, flags::DIGIT) {
            true => self.digits.get(code).map(|value| value as u32).ok_or(NotFound::Codepoint(code)),
            false => Err(NotFound::Codepoint(code)),
        }
    }

    /// числовое значение, в том числе дробное (U+00BD - 0.5) или из Unihan (U+4E00 - 1.0)
    pub fn numeric(&self, code: u32) -> Result<f64>
    {
        let record = self.record(code);

        match self.flags[record] & flags::NUMERIC != 0 {
            true => Ok(self.numerics[record]),
            false => Err(NotFound::Codepoint(code)),
        }
    }

    /// индекс специального преобразования регистра
    #[inline]
    pub fn special_casing(&self, code: u32) -> Option<usize>
    {
        match self.special_casing[self.record(code)] {
            NO_SPECIAL_CASING => None,
            index => Some(index as usize),
        }
    }

    /// класс канонического комбинирования
    #[inline(always)]
    pub fn combining_class(&self, code: u32) -> u8
    {
        self.combining_classes.get(code)
    }

    /// количество записей свойств
    #[inline]
    pub fn records_count(&self) -> usize
    {
        self.categories.len()
    }
}
