/// количество бит, с помощью которых кодируется смещение кодпоинта внутри блока
pub const BLOCK_BITS: u32 = 7;
/// размер блока (страницы)
pub const BLOCK_SIZE: usize = 1 << BLOCK_BITS;
/// маска смещения внутри блока
pub const BLOCK_MASK: u32 = (1 << BLOCK_BITS) - 1;
/// количество блоков, покрывающих всё пространство кодпоинтов (0x110000 >> 7)
pub const BLOCKS_COUNT: usize = 0x110000 >> BLOCK_BITS;

/// двухуровневая таблица: индекс блока -> страница из 128 значений
///
/// одинаковые страницы хранятся один раз, даже если соответствующие им блоки находятся далеко друг от друга.
/// страница 0 - заглушка, состоящая из нулей: ей соответствуют все неназначенные области пространства кодпоинтов.
#[derive(Debug, Clone, Copy)]
pub struct PageTable<'a, T>
{
    /// номер страницы для каждого блока
    pub index: &'a [u16],
    /// страницы, записанные подряд
    pub pages: &'a [T],
}

impl<'a, T: Copy> PageTable<'a, T>
{
    /// значение для кодпоинта
    /// кодпоинт должен находиться в пределах 0 ..= 0x10FFFF
    #[inline(always)]
    pub fn get(&self, code: u32) -> T
    {
        debug_assert!(code < 0x110000, "U+{:04X} за пределами пространства кодпоинтов", code);

        let page = self.index[(code >> BLOCK_BITS) as usize] as usize;
        let offset = (code & BLOCK_MASK) as usize;

        self.pages[(page << BLOCK_BITS) | offset]
    }

    /// количество уникальных страниц
    #[inline]
    pub fn pages_count(&self) -> usize
    {
        self.pages.len() / BLOCK_SIZE
    }

    /// страница для блока
    #[inline]
    pub fn page(&self, block: usize) -> &'a [T]
    {
        let page = self.index[block] as usize;

        &self.pages[page << BLOCK_BITS .. (page + 1) << BLOCK_BITS]
    }
}
