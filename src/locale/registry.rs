use super::{builtin, Locale};
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

lazy_static! {
    /// The locales that ship with the crate
    pub static ref BUILTIN_LOCALES: Locales = Locales::builtin();
}

/// Locales indexed by their language code
#[derive(Clone, Debug, Default)]
pub struct Locales {
    locales: HashMap<String, Arc<Locale>>,
}

impl Locales {
    /// Create a registry containing only the built-in languages
    pub fn builtin() -> Self {
        let mut locales = Self::default();
        locales.insert("es", builtin::spanish());
        locales.insert("en", builtin::english());
        locales
    }

    /// Add or replace a language
    pub fn insert(&mut self, lang: &str, locale: Locale) {
        self.locales.insert(lang.to_owned(), Arc::new(locale));
    }

    /// Load a TOML locale file, registering it under its file stem
    ///
    /// Returns the language code that the locale was registered as.
    pub fn load_file(&mut self, path: &Path) -> Result<String> {
        let lang = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| Error::LocaleFile {
                path: path.to_owned(),
                message: "file name is not a valid language code".to_owned(),
            })?
            .to_owned();
        let locale = Locale::load(path)?;
        self.insert(&lang, locale);
        Ok(lang)
    }

    /// Lookup a language by its code
    pub fn get(&self, lang: &str) -> Result<Arc<Locale>> {
        self.locales
            .get(lang)
            .map(Arc::clone)
            .ok_or_else(|| Error::UnknownLanguage(lang.to_owned()))
    }

    /// Return the registered language codes in sorted order
    pub fn languages(&self) -> Vec<&str> {
        let mut languages = self.locales.keys().map(String::as_str).collect::<Vec<_>>();
        languages.sort_unstable();
        languages
    }
}

#[cfg(test)]
mod tests {
    use crate::locale::SentenceOrder;
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_builtin() -> anyhow::Result<()> {
        assert_eq!(BUILTIN_LOCALES.languages(), vec!["en", "es"]);
        assert_eq!(BUILTIN_LOCALES.get("es")?.now, "ahora");
        assert_eq!(
            BUILTIN_LOCALES.get("es")?.sentence_order,
            SentenceOrder::Prefix
        );
        assert_eq!(BUILTIN_LOCALES.get("en")?.ago_time, "ago");
        assert_eq!(
            BUILTIN_LOCALES.get("en")?.sentence_order,
            SentenceOrder::Suffix
        );
        Ok(())
    }

    #[test]
    fn test_shared() -> anyhow::Result<()> {
        assert!(Arc::ptr_eq(
            &BUILTIN_LOCALES.get("en")?,
            &BUILTIN_LOCALES.get("en")?
        ));
        Ok(())
    }

    #[test]
    fn test_unknown() {
        assert_matches!(BUILTIN_LOCALES.get("fr"), Err(Error::UnknownLanguage(lang)) => {
            assert_eq!(lang, "fr");
        });
    }

    #[test]
    fn test_insert_replaces() -> anyhow::Result<()> {
        let mut locales = Locales::builtin();
        let mut locale = builtin::english();
        locale.now = "right now".to_owned();
        locales.insert("en", locale);
        assert_eq!(locales.get("en")?.now, "right now");
        assert_eq!(locales.languages(), vec!["en", "es"]);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let mut locales = Locales::builtin();
        assert_matches!(
            locales.load_file(Path::new("/nonexistent/fr.toml")),
            Err(Error::LocaleFile { .. })
        );
        assert!(locales.get("fr").is_err());
    }
}
