use core::fmt::Write;

use super::hangul::{decompose_hangul, is_hangul_syllable};
use super::DecompositionTag;
use crate::data::DecompositionData;
use crate::tables::span;

/// вид полной декомпозиции
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecompositionKind
{
    /// каноническая (NFD)
    Canonical,
    /// совместимости (NFKD)
    Compatibility,
}

impl<'a> DecompositionData<'a>
{
    /// номер записи декомпозиции, None - у кодпоинта нет декомпозиции в UnicodeData.txt
    #[inline(always)]
    pub fn record(&self, code: u32) -> Option<usize>
    {
        match self.index.get(code) {
            0 => None,
            record => Some(record as usize),
        }
    }

    /// тег декомпозиции (только для декомпозиций совместимости)
    #[inline]
    pub fn tag(&self, code: u32) -> Option<DecompositionTag>
    {
        DecompositionTag::from_baked(self.tags[self.record(code)?])
    }

    /// декомпозиция, как она записана в UnicodeData.txt (без раскрытия)
    #[inline]
    pub fn mapping(&self, code: u32) -> &'a [u32]
    {
        match self.record(code) {
            Some(record) => span(self.pool, self.mappings[record]),
            None => &[],
        }
    }

    /// текстовое представление декомпозиции: "<fraction> 0031 2044 0032"
    /// слоги хангыль не имеют записи в UnicodeData.txt, для них результат - пустая строка
    pub fn text(&self, code: u32) -> String
    {
        let mut result = String::new();

        if let Some(tag) = self.tag(code) {
            result.push_str(tag.as_str());
        }

        for &code in self.mapping(code) {
            if !result.is_empty() {
                result.push(' ');
            }

            // запись в String не может завершиться ошибкой
            let _ = write!(result, "{:04X}", code);
        }

        result
    }

    /// полная декомпозиция; пустая, если кодпоинт не раскладывается
    pub fn decompose(&self, code: u32, kind: DecompositionKind) -> Vec<u32>
    {
        let mut result = Vec::new();
        self.expand_into(code, kind, &mut result);

        result
    }

    /// раскрытая при запекании декомпозиция
    #[inline]
    fn expansion(&self, code: u32, kind: DecompositionKind) -> &'a [u32]
    {
        let record = match self.record(code) {
            Some(record) => record,
            None => return &[],
        };

        match kind {
            DecompositionKind::Canonical => span(self.pool, self.canonical[record]),
            DecompositionKind::Compatibility => span(self.pool, self.compatibility[record]),
        }
    }

    /// декомпозиции в таблице уже раскрыты полностью, поэтому рекурсия на них заканчивается на первом уровне
    fn expand_into(&self, code: u32, kind: DecompositionKind, result: &mut Vec<u32>)
    {
        if let Some(jamo) = decompose_hangul(code) {
            result.extend(jamo);
            return;
        }

        for &code in self.expansion(code, kind) {
            match is_hangul_syllable(code) || !self.expansion(code, kind).is_empty() {
                true => self.expand_into(code, kind, result),
                false => result.push(code),
            }
        }
    }

    /// количество кодпоинтов, имеющих декомпозицию
    #[inline]
    pub fn records_count(&self) -> usize
    {
        self.tags.len() - 1
    }
}
