/// значение для ключа не определено
///
/// единственный вид ошибки базы: это не сбой, а информация о том, что у кодпоинта (пары, названия) нет
/// запрошенного свойства. варианты различаются только ключом, по которому ничего не нашлось.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFound
{
    /// у кодпоинта нет значения запрошенного свойства
    #[error("no value defined for U+{0:04X}")]
    Codepoint(u32),
    /// пара не комбинируется
    #[error("U+{0:04X} U+{1:04X} is not a canonical composition pair")]
    Pair(u32, u32),
    /// неизвестное (или запрещенное параметрами поиска) название
    #[error("undefined character name {0:?}")]
    Name(String),
}

pub type Result<T> = core::result::Result<T, NotFound>;
