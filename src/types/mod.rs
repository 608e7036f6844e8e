pub mod entities;
pub mod identifiers;

pub use entities::{Locale, LocaleKind, Record};
pub use identifiers::EntityId;
