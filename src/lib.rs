//! Blueprint schema access for CMS panel plugins
//!
//! `architect-blueprints` reads per-content-type blueprint documents
//! (YAML), caches them after first parse, and answers the questions a
//! panel plugin asks of them: field metadata, option lists, localized
//! labels with a default-locale fallback, and a ready-to-render select
//! menu built from a field's options.
//!
//! # Architecture
//!
//! - **Schema-only**: Reads blueprints; never writes or validates content
//! - **Load once**: One parsed document per content type per context
//! - **Explicit collaborators**: Schema source, locale registry, request
//!   parameters, and settings are passed in — nothing global
//! - **Abstract menus**: [`SelectMenu`] describes the control; `to_html`
//!   is one rendering of it, not the only one

pub mod context;
pub mod error;
pub mod locale;
pub mod menu;
pub mod source;
pub mod store;
pub mod types;

pub use context::{BlueprintContext, BlueprintContextBuilder};
pub use error::{BlueprintError, Result};
pub use locale::{resolve_label, LocaleRegistry, StaticLocales};
pub use menu::{
    scalars_match, MapParams, MapSettings, MenuOption, NoParams, NoSettings, RequestParams,
    SelectMenu, SettingsStore, BLACKLIST_KEY,
};
pub use source::{BlueprintSource, DirectorySource, MemorySource};
pub use store::BlueprintStore;
pub use types::{scalar_string, Blueprint, FieldDef, Label, OptionsMap};
