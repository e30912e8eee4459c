mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::fmt_number;
pub use locales::{DEFAULT_LANG, LOCALE_STORAGE_KEY, LocaleMeta, locales};
pub use render::{t, tr};
