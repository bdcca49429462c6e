// This file is part of `bcp47_tag-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_tag-rizzen-yazston` crate.

use core::fmt::{ Display, Formatter, Result as FmtResult };

/// The role a subtag plays within a language tag, in the order the roles must appear per
/// [RFC 5646] section 2.1:
///
/// - Language: the primary language subtag, always first;
///
/// - Extended: a three letter extended language subtag;
///
/// - Script: a four letter script subtag;
///
/// - Region: a two letter or three digit region subtag;
///
/// - Variant: a variant subtag of five to eight characters, or four starting with a digit;
///
/// - Extension: a singleton other than `x` with its payload subtag;
///
/// - PrivateUse: the `x` singleton with its payload subtag.
///
/// The ordinals are explicit as the ordering of the roles is what the classifier checks against.
///
/// [RFC 5646]: https://www.rfc-editor.org/rfc/rfc5646
#[derive( Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord )]
pub enum SubtagRole {
    Language = 0,
    Extended = 1,
    Script = 2,
    Region = 3,
    Variant = 4,
    Extension = 5,
    PrivateUse = 6,
}

/// An extension or private use group: the singleton character and the payload subtag that follows
/// it. The payload is consumed by the singleton and is never classified on its own.
#[derive( Debug, Clone, PartialEq )]
pub struct ExtensionGroup {
    pub singleton: char,
    pub payload: String,
}

impl Display for ExtensionGroup {
    fn fmt( &self, formatter: &mut Formatter ) -> FmtResult {
        write!( formatter, "{}-{}", self.singleton, self.payload )
    }
}

/// The outcome of parsing one language tag.
///
/// The subtag lists hold the subtags in their received case and input order. `canonicalise` is
/// present if and only if the tag is well-formed, holding the canonical form per [RFC 5646]
/// section 4.5, and `is_valid` mirrors its presence. The single exception is the empty input,
/// which produces an empty canonical string while remaining invalid.
///
/// All diagnostics are collected into `error_messages`, parsing itself never fails.
///
/// [RFC 5646]: https://www.rfc-editor.org/rfc/rfc5646
#[derive( Debug, Clone, Default )]
pub struct Results {
    pub language_tag: String,
    pub extended_tags: Vec<String>,
    pub script_tags: Vec<String>,
    pub region_tags: Vec<String>,
    pub variant_tags: Vec<String>,
    pub extension_tags: Vec<String>,
    pub private_use_tags: Vec<String>,
    pub canonicalise: Option<String>,
    pub is_valid: bool,
    pub error_messages: Vec<String>,
}

impl Results {

    /// Creates an empty `Results` for one parse.
    pub fn new() -> Results {
        Results {
            language_tag: String::new(),
            extended_tags: Vec::new(),
            script_tags: Vec::new(),
            region_tags: Vec::new(),
            variant_tags: Vec::new(),
            extension_tags: Vec::new(),
            private_use_tags: Vec::new(),
            canonicalise: None,
            is_valid: false,
            error_messages: Vec::new(),
        }
    }
}

// Title case as used for script subtags: first character uppercased, the rest lowercased.
pub( crate ) fn titlecase( subtag: &str ) -> String {
    let mut characters = subtag.chars();
    match characters.next() {
        None => String::new(),
        Some( first ) => {
            let mut result = first.to_ascii_uppercase().to_string();
            result.push_str( characters.as_str().to_lowercase().as_str() );
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_order() {
        assert!( SubtagRole::Language < SubtagRole::Extended, "Roles must order by position." );
        assert!( SubtagRole::Extension < SubtagRole::PrivateUse, "Roles must order by position." );
    }

    #[test]
    fn titlecase_script() {
        assert_eq!( titlecase( "lATN" ).as_str(), "Latn", "Must be first upper, rest lower." );
        assert_eq!( titlecase( "" ).as_str(), "", "Empty input must stay empty." );
    }
}
