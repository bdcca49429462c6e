// This file is part of `bcp47_registry-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_registry-rizzen-yazston` crate.

/// The category of a registry record, taken from the record's `Type` field:
///
/// - Language, Extlang, Script, Region, Variant: subtag records, keyed by the `Subtag` field;
///
/// - Grandfathered, Redundant: whole tag records predating the current BCP 47 syntax, keyed by the
///   `Tag` field.
#[derive( Debug, Copy, Clone, PartialEq, Eq )]
pub enum RegistryCategory {
    Language,
    Extlang,
    Script,
    Region,
    Variant,
    Grandfathered,
    Redundant,
}

impl RegistryCategory {

    /// Obtain the category for a `Type` field value, or `None` for an unrecognised value.
    pub fn from_field( value: &str ) -> Option<RegistryCategory> {
        match value.to_lowercase().as_str() {
            "language" => Some( RegistryCategory::Language ),
            "extlang" => Some( RegistryCategory::Extlang ),
            "script" => Some( RegistryCategory::Script ),
            "region" => Some( RegistryCategory::Region ),
            "variant" => Some( RegistryCategory::Variant ),
            "grandfathered" => Some( RegistryCategory::Grandfathered ),
            "redundant" => Some( RegistryCategory::Redundant ),
            _ => None,
        }
    }
}

/// A single record of the IANA Language Subtag Registry.
///
/// The `tag` field holds the record's `Subtag` value (or `Tag` value for grandfathered and
/// redundant records) in the case used by the registry file. The registry maps are keyed by the
/// lowercase form, while this field keeps the original case for canonical output.
#[derive( Debug, Clone )]
pub struct RegistrySubtag {
    pub category: RegistryCategory,
    pub tag: String,                       // `Subtag` or `Tag` field, original case.
    pub descriptions: Vec<String>,         // One or more `Description` fields.
    pub added: String,                     // `Added` field, ISO date.
    pub suppress_script: Option<String>,   // `Suppress-Script` field.
    pub scope: Option<String>,             // `Scope` field.
    pub macrolanguage: Option<String>,     // `Macrolanguage` field.
    pub comments: Option<String>,          // `Comments` field.
    pub deprecated: Option<String>,        // `Deprecated` field, ISO date.
    pub preferred_value: Option<String>,   // `Preferred-Value` field.
    pub prefixes: Vec<String>,             // Zero or more `Prefix` fields.
}
