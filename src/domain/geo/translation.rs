//! Per-locale translation overlay.
//!
//! Entities store default-locale values inline and partial overrides in a
//! `Translations` map keyed by locale code (`{"ru": {"name": "..."}}`).
//! Locale keys are matched verbatim; no case folding happens here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields that may carry a per-locale override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslatableField {
    Name,
    Description,
    Address,
    Location,
}

impl TranslatableField {
    /// Key used inside a locale entry.
    pub fn key(&self) -> &'static str {
        match self {
            TranslatableField::Name => "name",
            TranslatableField::Description => "description",
            TranslatableField::Address => "address",
            TranslatableField::Location => "location",
        }
    }
}

/// Locale code to partial field overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(BTreeMap<String, BTreeMap<String, String>>);

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one field override for a locale.
    pub fn with(mut self, locale: impl Into<String>, field: TranslatableField, value: impl Into<String>) -> Self {
        self.0
            .entry(locale.into())
            .or_default()
            .insert(field.key().to_string(), value.into());
        self
    }

    /// Override for `field` in `locale`, if one exists.
    pub fn get(&self, locale: &str, field: TranslatableField) -> Option<&str> {
        self.0
            .get(locale)
            .and_then(|entry| entry.get(field.key()))
            .map(String::as_str)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An entity whose text fields can be overlaid with a translation.
pub trait Translatable: Clone {
    /// The fields this entity exposes for translation.
    const FIELDS: &'static [TranslatableField];

    fn translations(&self) -> Option<&Translations>;

    /// Writes a translated value. Fields the entity does not have are ignored.
    fn set_field(&mut self, field: TranslatableField, value: String);
}

/// Returns a copy of `entity` with the listed fields overlaid from
/// `translations[locale]`.
///
/// Missing translations, a missing locale, or a field absent from the locale
/// entry all leave the default-locale value in place. The input is untouched.
pub fn apply_translations<T: Translatable>(
    entity: &T,
    translations: Option<&Translations>,
    locale: &str,
    fields: &[TranslatableField],
) -> T {
    let mut localized = entity.clone();
    let Some(translations) = translations else {
        return localized;
    };
    for field in fields {
        if let Some(value) = translations.get(locale, *field) {
            localized.set_field(*field, value.to_string());
        }
    }
    localized
}

/// Overlays the entity's own translations for all of its translatable fields.
pub fn localize<T: Translatable>(entity: &T, locale: &str) -> T {
    apply_translations(entity, entity.translations(), locale, T::FIELDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Garage {
        name: String,
        description: Option<String>,
        capacity: u32,
        translations: Option<Translations>,
    }

    impl Translatable for Garage {
        const FIELDS: &'static [TranslatableField] =
            &[TranslatableField::Name, TranslatableField::Description];

        fn translations(&self) -> Option<&Translations> {
            self.translations.as_ref()
        }

        fn set_field(&mut self, field: TranslatableField, value: String) {
            match field {
                TranslatableField::Name => self.name = value,
                TranslatableField::Description => self.description = Some(value),
                TranslatableField::Address | TranslatableField::Location => {}
            }
        }
    }

    fn garage() -> Garage {
        Garage {
            name: "Box".to_string(),
            description: Some("Covered parking".to_string()),
            capacity: 12,
            translations: None,
        }
    }

    #[test]
    fn overlays_listed_field_for_matching_locale() {
        let translations = Translations::new().with("ru", TranslatableField::Name, "Х");
        let entity = garage();

        let localized = apply_translations(&entity, Some(&translations), "ru", &[TranslatableField::Name]);

        assert_eq!(localized.name, "Х");
        assert_eq!(localized.description, entity.description);
        assert_eq!(localized.capacity, 12);
        assert_eq!(entity.name, "Box");
    }

    #[test]
    fn missing_locale_returns_unchanged_copy() {
        let translations = Translations::new().with("ru", TranslatableField::Name, "Х");
        let entity = garage();

        let localized = apply_translations(&entity, Some(&translations), "en", &[TranslatableField::Name]);

        assert_eq!(localized, entity);
    }

    #[test]
    fn missing_translations_returns_unchanged_copy() {
        let entity = garage();
        assert_eq!(apply_translations(&entity, None, "ru", Garage::FIELDS), entity);
    }

    #[test]
    fn unlisted_fields_are_not_overlaid() {
        let translations = Translations::new()
            .with("de", TranslatableField::Name, "Halle")
            .with("de", TranslatableField::Description, "Überdacht");
        let localized =
            apply_translations(&garage(), Some(&translations), "de", &[TranslatableField::Description]);

        assert_eq!(localized.name, "Box");
        assert_eq!(localized.description.as_deref(), Some("Überdacht"));
    }

    #[test]
    fn locale_match_is_case_sensitive() {
        let translations = Translations::new().with("ru", TranslatableField::Name, "Х");
        let localized = apply_translations(&garage(), Some(&translations), "RU", Garage::FIELDS);
        assert_eq!(localized.name, "Box");
    }

    #[test]
    fn localize_uses_entity_translations() {
        let mut entity = garage();
        entity.translations = Some(Translations::new().with("it", TranslatableField::Name, "Rimessa"));
        assert_eq!(localize(&entity, "it").name, "Rimessa");
    }

    #[test]
    fn translations_deserialize_from_nested_json() {
        let json = r#"{"ru":{"name":"Автодром","address":"ул. Гоночная"}}"#;
        let translations: Translations = serde_json::from_str(json).unwrap();
        assert_eq!(translations.get("ru", TranslatableField::Name), Some("Автодром"));
        assert_eq!(translations.get("ru", TranslatableField::Description), None);
        assert!(translations.has_locale("ru"));
    }
}
