//! BlueprintContext — main API surface for blueprint access.
//!
//! One long-lived context per process owns the blueprint cache and the
//! host collaborators (schema source, locale registry, request-parameter
//! reader, settings store). All collaborators are explicit; nothing is
//! read from global state.

use std::sync::Arc;

use crate::error::{BlueprintError, Result};
use crate::locale::{resolve_label, LocaleRegistry, StaticLocales};
use crate::menu::{
    scalars_match, MenuOption, NoParams, NoSettings, RequestParams, SelectMenu, SettingsStore,
    BLACKLIST_KEY,
};
use crate::source::BlueprintSource;
use crate::store::BlueprintStore;
use crate::types::{Blueprint, FieldDef, OptionsMap};

/// Builder for `BlueprintContext`. Created by `BlueprintContext::over()`.
pub struct BlueprintContextBuilder {
    source: Box<dyn BlueprintSource>,
    locales: Box<dyn LocaleRegistry>,
    params: Box<dyn RequestParams>,
    settings: Box<dyn SettingsStore>,
}

impl BlueprintContextBuilder {
    /// Provide the site/language registry. Defaults to `StaticLocales`
    /// with `en` as both current and default locale.
    pub fn with_locales(mut self, locales: impl LocaleRegistry + 'static) -> Self {
        self.locales = Box::new(locales);
        self
    }

    /// Provide the request-parameter reader. Defaults to no parameters.
    pub fn with_params(mut self, params: impl RequestParams + 'static) -> Self {
        self.params = Box::new(params);
        self
    }

    /// Provide the settings store. Defaults to nothing configured.
    pub fn with_settings(mut self, settings: impl SettingsStore + 'static) -> Self {
        self.settings = Box::new(settings);
        self
    }

    /// Build the context with an empty blueprint cache.
    pub fn build(self) -> BlueprintContext {
        BlueprintContext {
            store: BlueprintStore::new(self.source),
            locales: self.locales,
            params: self.params,
            settings: self.settings,
        }
    }
}

/// Accessor over blueprint schema documents.
///
/// Blueprints are parsed once per content type and cached for the
/// lifetime of the context. Label lookups resolve against the registry's
/// current locale unless a locale is passed explicitly.
pub struct BlueprintContext {
    store: BlueprintStore,
    locales: Box<dyn LocaleRegistry>,
    params: Box<dyn RequestParams>,
    settings: Box<dyn SettingsStore>,
}

impl BlueprintContext {
    /// Start building a context over the given blueprint source.
    ///
    /// ```rust,ignore
    /// let ctx = BlueprintContext::over(DirectorySource::new(root))
    ///     .with_locales(StaticLocales::new("de", "en"))
    ///     .build();
    /// ```
    pub fn over(source: impl BlueprintSource + 'static) -> BlueprintContextBuilder {
        BlueprintContextBuilder {
            source: Box::new(source),
            locales: Box::new(StaticLocales::default()),
            params: Box::new(NoParams),
            settings: Box::new(NoSettings),
        }
    }

    /// The parsed blueprint for `type_id`, loading it on first use.
    /// Repeated calls for one content type return the same document.
    pub fn blueprint(&self, type_id: &str) -> Result<Arc<Blueprint>> {
        self.store.get(type_id)
    }

    /// Descriptor for one field of a content type. A missing field is
    /// `None`, not an error.
    pub fn field_info(&self, type_id: &str, field: &str) -> Result<Option<FieldDef>> {
        Ok(self.blueprint(type_id)?.field(field).cloned())
    }

    /// The field's options in declaration order; empty when the field is
    /// missing or declares no options.
    pub fn field_options(&self, type_id: &str, field: &str) -> Result<OptionsMap> {
        Ok(self
            .field_info(type_id, field)?
            .and_then(|f| f.options)
            .unwrap_or_default())
    }

    /// Localized label for a field. Resolves against the current locale
    /// when `locale` is `None`. Missing field or unresolvable label is
    /// `None`.
    pub fn field_label(
        &self,
        type_id: &str,
        field: &str,
        locale: Option<&str>,
    ) -> Result<Option<String>> {
        let requested = self.requested_locale(locale);
        let fallback = self.locales.default_locale();
        let Some(label) = self.field_info(type_id, field)?.and_then(|f| f.label) else {
            return Ok(None);
        };
        Ok(resolve_label(&label, &requested, &fallback).map(str::to_string))
    }

    /// Localized label for one of a field's option values.
    ///
    /// `value` is matched by its canonical scalar string form. A value
    /// the field does not declare is [`BlueprintError::UnknownOptionValue`].
    pub fn field_option_label(
        &self,
        type_id: &str,
        field: &str,
        value: &str,
        locale: Option<&str>,
    ) -> Result<String> {
        let requested = self.requested_locale(locale);
        let fallback = self.locales.default_locale();
        let options = self.field_options(type_id, field)?;
        let label = options
            .get(value)
            .ok_or_else(|| BlueprintError::UnknownOptionValue {
                field: field.to_string(),
                value: value.to_string(),
            })?;
        resolve_label(label, &requested, &fallback)
            .map(str::to_string)
            .ok_or_else(|| BlueprintError::MissingLabel {
                field: field.to_string(),
                value: value.to_string(),
            })
    }

    /// Build a select-menu description from a field's options.
    ///
    /// An explicit `required` wins; otherwise the field descriptor's
    /// `required` flag decides. A non-required menu carries a blank
    /// placeholder before the entries. Values configured under
    /// `architect.blacklist` are skipped; the entry matching the request's
    /// current value for the field is marked selected.
    pub fn field_options_menu(
        &self,
        type_id: &str,
        field: &str,
        required: Option<bool>,
        locale: Option<&str>,
    ) -> Result<SelectMenu> {
        let info = self.field_info(type_id, field)?;
        let required = required.unwrap_or_else(|| info.as_ref().is_some_and(|f| f.required));
        let requested = self.requested_locale(locale);
        let fallback = self.locales.default_locale();
        let blacklist = self.settings.values(BLACKLIST_KEY);
        let current = self.params.get(field);

        let mut options = Vec::new();
        for (value, label) in info.and_then(|f| f.options).unwrap_or_default() {
            if blacklist.iter().any(|b| scalars_match(b, &value)) {
                continue;
            }
            // Unresolvable labels render the raw option value.
            let label = resolve_label(&label, &requested, &fallback)
                .map(str::to_string)
                .unwrap_or_else(|| value.clone());
            let selected = current.as_deref().is_some_and(|c| scalars_match(c, &value));
            options.push(MenuOption {
                value,
                label,
                selected,
            });
        }

        Ok(SelectMenu {
            field: field.to_string(),
            required,
            blank: !required,
            options,
        })
    }

    /// Drop all cached blueprints. Intended for tests and schema reloads.
    pub fn clear_cache(&self) {
        self.store.clear();
    }

    fn requested_locale(&self, locale: Option<&str>) -> String {
        match locale {
            Some(l) => l.to_string(),
            None => self.locales.current_locale(),
        }
    }
}
