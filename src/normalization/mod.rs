mod composition;
mod decomposition;
mod tag;

pub mod hangul;

pub use decomposition::DecompositionKind;
pub use tag::DecompositionTag;
