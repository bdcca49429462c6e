// This file is part of `bcp47_registry-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_registry-rizzen-yazston` crate.

use crate::{ RegistryCategory, RegistryError, RegistrySubtag };
use std::collections::HashMap;
use std::path::Path;

#[cfg( feature = "logging" )]
use log::{ debug, error };

/// The parsed IANA Language Subtag Registry.
///
/// Holds one lookup map per record category, keyed by the lowercase `Subtag` field, except for the
/// `deprecated` map which holds both the grandfathered and the redundant records keyed by the
/// lowercase `Tag` field. All queries are case-insensitive, the querying subtag is lowercased
/// before the lookup.
///
/// The registry file guarantees key uniqueness within a category. Should a corrupt file repeat a
/// key, the last record wins and no diagnostic is produced.
///
/// # Examples
///
/// ```
/// use bcp47_registry::Registry;
///
/// let registry = Registry::from_text(
///     "File-Date: 2025-08-16\n\
///     %%\n\
///     Type: region\n\
///     Subtag: US\n\
///     Description: United States\n\
///     Added: 2005-10-16\n"
/// );
/// let record = registry.region( "us" ).expect( "The `US` record must be present." );
///
/// assert_eq!( record.tag.as_str(), "US", "The record must keep the registry file's case." );
/// assert_eq!( record.descriptions[ 0 ].as_str(), "United States", "Wrong description." );
/// ```
pub struct Registry {
    file_date: String,
    languages: HashMap<String, RegistrySubtag>,
    extlangs: HashMap<String, RegistrySubtag>,
    scripts: HashMap<String, RegistrySubtag>,
    regions: HashMap<String, RegistrySubtag>,
    variants: HashMap<String, RegistrySubtag>,
    deprecated: HashMap<String, RegistrySubtag>,
}

// Continuation target for whitespace-led lines. Only `Description` and `Comments` may span lines,
// any other field resets the target.
enum Continuation {
    None,
    Description,
    Comments,
}

// Collects field values until the record separator is reached. The category arrives with the
// `Type` field, thus is unknown while collecting.
struct RecordBuilder {
    category: Option<RegistryCategory>,
    tag: String,
    descriptions: Vec<String>,
    added: String,
    suppress_script: Option<String>,
    scope: Option<String>,
    macrolanguage: Option<String>,
    comments: Option<String>,
    deprecated: Option<String>,
    preferred_value: Option<String>,
    prefixes: Vec<String>,
}

impl RecordBuilder {
    fn new() -> RecordBuilder {
        RecordBuilder {
            category: None,
            tag: String::new(),
            descriptions: Vec::new(),
            added: String::new(),
            suppress_script: None,
            scope: None,
            macrolanguage: None,
            comments: None,
            deprecated: None,
            preferred_value: None,
            prefixes: Vec::new(),
        }
    }

    // A record is complete once it has a recognised `Type` and a key. The `File-Date` header and
    // records of unrecognised types produce no record.
    fn build( self ) -> Option<RegistrySubtag> {
        let category = self.category?;
        if self.tag.is_empty() {
            return None;
        }
        Some( RegistrySubtag {
            category,
            tag: self.tag,
            descriptions: self.descriptions,
            added: self.added,
            suppress_script: self.suppress_script,
            scope: self.scope,
            macrolanguage: self.macrolanguage,
            comments: self.comments,
            deprecated: self.deprecated,
            preferred_value: self.preferred_value,
            prefixes: self.prefixes,
        } )
    }
}

impl Registry {

    /// Reads and parses the registry file at the supplied path.
    ///
    /// The file is read in full and the handle released before parsing starts. A missing or
    /// unreadable file results in [`RegistryError::Io`], no tag engine can be constructed without
    /// a registry.
    pub fn try_new<T: AsRef<Path>>( path: T ) -> Result<Registry, RegistryError> {
        let text = match std::fs::read_to_string( path.as_ref() ) {
            Ok( text ) => text,
            Err( error ) => {
                #[cfg( feature = "logging" )]
                error!( "Unable to read the registry file {}: {}.", path.as_ref().display(), error );

                return Err( RegistryError::from( error ) );
            }
        };
        Ok( Registry::from_text( &text ) )
    }

    /// Parses registry text in the line-oriented format of [RFC 5646] section 3.
    ///
    /// Lines of `%%` separate records, a line beginning with whitespace continues the previous
    /// `Description` or `Comments` value with its leading whitespace character stripped, and the
    /// remaining lines carry `Name: value` fields. Unknown field names are ignored and malformed
    /// lines are skipped silently, the registry is a published artifact assumed well-formed.
    ///
    /// On a `Name: value` line only the pieces up to a second `:` are taken, thus a value
    /// containing `:` is truncated at it.
    ///
    /// [RFC 5646]: https://www.rfc-editor.org/rfc/rfc5646
    pub fn from_text( text: &str ) -> Registry {
        let mut registry = Registry {
            file_date: String::new(),
            languages: HashMap::<String, RegistrySubtag>::new(),
            extlangs: HashMap::<String, RegistrySubtag>::new(),
            scripts: HashMap::<String, RegistrySubtag>::new(),
            regions: HashMap::<String, RegistrySubtag>::new(),
            variants: HashMap::<String, RegistrySubtag>::new(),
            deprecated: HashMap::<String, RegistrySubtag>::new(),
        };
        let mut builder = RecordBuilder::new();
        let mut continuation = Continuation::None;
        for line in text.lines() {
            if line.trim_end() == "%%" {
                registry.insert( builder );
                builder = RecordBuilder::new();
                continuation = Continuation::None;
                continue;
            }
            let mut characters = line.chars();
            let first = match characters.next() {
                None => continue,
                Some( first ) => first,
            };
            if first.is_whitespace() {
                let remainder = characters.as_str();
                match continuation {
                    Continuation::Description => {
                        if let Some( last ) = builder.descriptions.last_mut() {
                            last.push_str( remainder );
                        }
                    }
                    Continuation::Comments => {
                        if let Some( comments ) = builder.comments.as_mut() {
                            comments.push_str( remainder );
                        }
                    }
                    Continuation::None => {}
                }
                continue;
            }
            let mut pieces = line.split( ':' );
            let name = match pieces.next() {
                None => continue,
                Some( name ) => name.trim(),
            };
            let value = match pieces.next() {
                None => {
                    // No colon: not a field, not a continuation. Skipped.
                    continuation = Continuation::None;
                    continue;
                }
                Some( value ) => value.trim().to_string(),
            };
            continuation = Continuation::None;
            match name {
                "File-Date" => registry.file_date = value,
                "Type" => builder.category = RegistryCategory::from_field( &value ),
                "Subtag" | "Tag" => builder.tag = value,
                "Description" => {
                    builder.descriptions.push( value );
                    continuation = Continuation::Description;
                }
                "Added" => builder.added = value,
                "Suppress-Script" => builder.suppress_script = Some( value ),
                "Scope" => builder.scope = Some( value ),
                "Macrolanguage" => builder.macrolanguage = Some( value ),
                "Comments" => {
                    builder.comments = Some( value );
                    continuation = Continuation::Comments;
                }
                "Deprecated" => builder.deprecated = Some( value ),
                "Preferred-Value" => builder.preferred_value = Some( value ),
                "Prefix" => builder.prefixes.push( value ),
                _ => {} // Unknown field names are ignored.
            }
        }
        registry.insert( builder );

        #[cfg( feature = "logging" )]
        debug!(
            "Loaded registry dated {}: {} languages, {} extlangs, {} scripts, {} regions, \
            {} variants, {} deprecated tags.",
            registry.file_date,
            registry.languages.len(),
            registry.extlangs.len(),
            registry.scripts.len(),
            registry.regions.len(),
            registry.variants.len(),
            registry.deprecated.len(),
        );

        registry
    }

    /// Returns the `File-Date` header value of the registry file.
    pub fn file_date( &self ) -> &str {
        &self.file_date
    }

    /// Obtain the language record for the supplied subtag, case-insensitively.
    pub fn language( &self, subtag: &str ) -> Option<&RegistrySubtag> {
        self.languages.get( &subtag.to_lowercase() )
    }

    /// Obtain the extended language record for the supplied subtag, case-insensitively.
    pub fn extlang( &self, subtag: &str ) -> Option<&RegistrySubtag> {
        self.extlangs.get( &subtag.to_lowercase() )
    }

    /// Obtain the script record for the supplied subtag, case-insensitively.
    pub fn script( &self, subtag: &str ) -> Option<&RegistrySubtag> {
        self.scripts.get( &subtag.to_lowercase() )
    }

    /// Obtain the region record for the supplied subtag, case-insensitively.
    pub fn region( &self, subtag: &str ) -> Option<&RegistrySubtag> {
        self.regions.get( &subtag.to_lowercase() )
    }

    /// Obtain the variant record for the supplied subtag, case-insensitively.
    pub fn variant( &self, subtag: &str ) -> Option<&RegistrySubtag> {
        self.variants.get( &subtag.to_lowercase() )
    }

    /// Obtain the grandfathered or redundant record registered for the supplied whole tag,
    /// case-insensitively.
    pub fn deprecated_tag( &self, tag: &str ) -> Option<&RegistrySubtag> {
        self.deprecated.get( &tag.to_lowercase() )
    }

    /// Returns the number of language records.
    pub fn language_count( &self ) -> usize {
        self.languages.len()
    }

    /// Returns the number of extended language records.
    pub fn extlang_count( &self ) -> usize {
        self.extlangs.len()
    }

    /// Returns the number of script records.
    pub fn script_count( &self ) -> usize {
        self.scripts.len()
    }

    /// Returns the number of region records.
    pub fn region_count( &self ) -> usize {
        self.regions.len()
    }

    /// Returns the number of variant records.
    pub fn variant_count( &self ) -> usize {
        self.variants.len()
    }

    /// Returns the number of grandfathered and redundant records.
    pub fn deprecated_count( &self ) -> usize {
        self.deprecated.len()
    }

    fn insert( &mut self, builder: RecordBuilder ) {
        let record = match builder.build() {
            None => return,
            Some( record ) => record,
        };
        let key = record.tag.to_lowercase();
        let map = match record.category {
            RegistryCategory::Language => &mut self.languages,
            RegistryCategory::Extlang => &mut self.extlangs,
            RegistryCategory::Script => &mut self.scripts,
            RegistryCategory::Region => &mut self.regions,
            RegistryCategory::Variant => &mut self.variants,
            RegistryCategory::Grandfathered | RegistryCategory::Redundant => &mut self.deprecated,
        };
        map.insert( key, record ); // Last write wins on duplicate keys.
    }
}
