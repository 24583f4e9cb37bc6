mod full;
mod simple;

/// регистр, в который преобразуется кодпоинт
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Case
{
    /// прописные буквы
    Upper,
    /// строчные буквы
    Lower,
    /// заглавные буквы (первая буква слова)
    Title,
}
