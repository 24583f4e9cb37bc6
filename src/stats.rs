/// размеры загруженных таблиц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats
{
    /// количество уникальных записей свойств
    pub records: usize,
    /// количество уникальных страниц таблицы свойств
    pub pages: usize,
    /// количество страниц таблицы классов комбинирования
    pub combining_class_pages: usize,
    /// количество кодпоинтов с декомпозицией
    pub decompositions: usize,
    /// количество страниц таблицы декомпозиции
    pub decomposition_pages: usize,
    /// количество комбинируемых пар (без хангыль)
    pub compositions: usize,
    /// количество специальных преобразований регистра
    pub special_casing: usize,
    /// количество названий в словаре
    pub names: usize,
    /// количество псевдонимов
    pub aliases: usize,
    /// количество именованных последовательностей
    pub named_sequences: usize,
}

impl core::fmt::Display for TableStats
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(
            f,
            "records: {} ({} pages), combining class pages: {}, decompositions: {} ({} pages), \
            compositions: {}, special casing: {}, names: {} (aliases: {}, named sequences: {})",
            self.records,
            self.pages,
            self.combining_class_pages,
            self.decompositions,
            self.decomposition_pages,
            self.compositions,
            self.special_casing,
            self.names,
            self.aliases,
            self.named_sequences,
        )
    }
}
