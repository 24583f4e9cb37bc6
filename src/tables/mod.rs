pub use page::*;
pub use range::*;

mod page;
mod range;

/// отрезок общего пула кодпоинтов: (смещение << 8) | длина
/// нулевая длина означает отсутствие записи
#[inline(always)]
pub fn span(pool: &[u32], packed: u32) -> &[u32]
{
    let offset = (packed >> 8) as usize;
    let len = (packed as u8) as usize;

    &pool[offset .. offset + len]
}
