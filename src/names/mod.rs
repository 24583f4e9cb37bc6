//! названия символов
//!
//! прямой поиск (название -> кодпоинт) и обратный (кодпоинт -> название). слоги хангыль и унифицированные
//! иероглифы CJK называются алгоритмически и в словарь не попадают, поэтому проверяются первыми.
//! псевдонимы и именованные последовательности хранятся в словаре под кодпоинтами зарезервированных областей
//! плоскости 15 и по умолчанию в результаты поиска не попадают.

pub mod cjk;
pub mod hangul;
mod trie;

pub use trie::{NameTrie, SortedNames};

use crate::data::NamesData;
use crate::error::{NotFound, Result};
use crate::tables::span;

/// начало области псевдонимов
pub const ALIASES_START: u32 = 0xF0000;
/// начало области именованных последовательностей (и конец области псевдонимов)
pub const NAMED_SEQUENCES_START: u32 = 0xF0200;
/// конец области именованных последовательностей
pub const NAMED_SEQUENCES_END: u32 = 0xF0400;

/// параметры прямого поиска по названию
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions
{
    /// искать среди именованных последовательностей. результат - кодпоинт зарезервированной области,
    /// последовательность по нему возвращает Names::named_sequence
    pub named_sequences: bool,
    /// искать среди псевдонимов (результат - кодпоинт, на который ссылается псевдоним)
    pub aliases: bool,
}

impl LookupOptions
{
    pub const fn new() -> Self
    {
        Self {
            named_sequences: false,
            aliases: false,
        }
    }

    pub const fn with_named_sequences(mut self) -> Self
    {
        self.named_sequences = true;
        self
    }

    pub const fn with_aliases(mut self) -> Self
    {
        self.aliases = true;
        self
    }
}

/// названия символов поверх словаря
#[derive(Clone, Copy)]
pub struct Names<'a>
{
    data: &'a NamesData<'a>,
    trie: SortedNames<'a>,
}

impl<'a> Names<'a>
{
    pub const fn new(data: &'a NamesData<'a>, list: &'a str) -> Self
    {
        Self {
            data,
            trie: SortedNames {
                list,
                offsets: data.offsets,
            },
        }
    }

    /// кодпоинт по названию
    pub fn lookup(&self, name: &str, options: LookupOptions) -> Result<u32>
    {
        if let Some(hex) = name.strip_prefix(cjk::CJK_PREFIX) {
            return cjk::lookup(hex).ok_or_else(|| not_found(name));
        }

        if let Some(syllable) = name.strip_prefix(hangul::HANGUL_PREFIX) {
            return hangul::lookup(syllable).ok_or_else(|| not_found(name));
        }

        let code = self
            .trie
            .forward(name)
            .and_then(|rank| self.data.codes.get(rank as usize).copied())
            .ok_or_else(|| not_found(name))?;

        if is_named_sequence(code) {
            return match options.named_sequences {
                true => Ok(code),
                false => {
                    tracing::trace!(character_name = name, "named sequence rejected");
                    Err(NotFound::Name(name.to_owned()))
                }
            };
        }

        if is_alias(code) {
            return match options.aliases {
                true => self
                    .data
                    .aliases
                    .get((code - ALIASES_START) as usize)
                    .copied()
                    .ok_or_else(|| not_found(name)),
                false => {
                    tracing::trace!(character_name = name, "alias rejected");
                    Err(NotFound::Name(name.to_owned()))
                }
            };
        }

        Ok(code)
    }

    /// название кодпоинта
    pub fn name(&self, code: u32) -> Result<String>
    {
        if let Some(name) = cjk::name(code) {
            return Ok(name);
        }

        if let Some(name) = hangul::name(code) {
            return Ok(name);
        }

        if is_alias(code) || is_named_sequence(code) {
            return Err(NotFound::Codepoint(code));
        }

        self.data
            .positions
            .get_nonzero(code)
            .and_then(|position| self.trie.inverse(position - 1))
            .map(str::to_owned)
            .ok_or(NotFound::Codepoint(code))
    }

    /// именованная последовательность по кодпоинту зарезервированной области
    pub fn named_sequence(&self, code: u32) -> Option<&'a [u32]>
    {
        match is_named_sequence(code) {
            true => self
                .data
                .named_sequences
                .get((code - NAMED_SEQUENCES_START) as usize)
                .map(|&packed| span(self.data.named_sequences_pool, packed)),
            false => None,
        }
    }

    /// количество названий в словаре, включая псевдонимы и именованные последовательности
    #[inline]
    pub fn len(&self) -> usize
    {
        self.trie.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.trie.is_empty()
    }

    #[inline]
    pub fn aliases_count(&self) -> usize
    {
        self.data.aliases.len()
    }

    #[inline]
    pub fn named_sequences_count(&self) -> usize
    {
        self.data.named_sequences.len()
    }
}

/// кодпоинт из области псевдонимов
#[inline]
pub fn is_alias(code: u32) -> bool
{
    (ALIASES_START .. NAMED_SEQUENCES_START).contains(&code)
}

/// кодпоинт из области именованных последовательностей
#[inline]
pub fn is_named_sequence(code: u32) -> bool
{
    (NAMED_SEQUENCES_START .. NAMED_SEQUENCES_END).contains(&code)
}

#[inline]
fn not_found(name: &str) -> NotFound
{
    tracing::trace!(character_name = name, "undefined character name");

    NotFound::Name(name.to_owned())
}
