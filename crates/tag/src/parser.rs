// This file is part of `bcp47_tag-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_tag-rizzen-yazston` crate.

use crate::canonicaliser::canonicalise;
use crate::classifier::classify;
use crate::validator::validate;
use crate::{ tokenise, ExtensionGroup, Results };
use bcp47_registry::Registry;

#[cfg( not( feature = "sync" ) )]
use std::rc::Rc as RefCount;

#[cfg( feature = "sync" )]
#[cfg( target_has_atomic = "ptr" )]
use std::sync::Arc as RefCount;

#[cfg( feature = "logging" )]
use log::trace;

#[cfg( doc )]
use std::sync::Arc;

#[cfg( doc )]
use std::rc::Rc;

// Scratch state of a single `parse()` call. Everything the passes share lives here rather than on
// the parser itself, thus concurrent parses against one registry cannot race.
pub( crate ) struct ParseContext {
    pub raw: String,
    pub tokens: Vec<String>,
    pub illegal_characters: Vec<String>,
    pub has_blank_tag: bool,
    pub out_of_order: bool,
    pub well_formed: bool,
    pub whole_tag_deprecated: bool,
    pub extensions: Vec<ExtensionGroup>,
    pub private_use: Vec<ExtensionGroup>,
}

impl ParseContext {
    fn new( tag: &str, registry: &Registry ) -> ParseContext {
        let ( tokens, illegal_characters ) = tokenise( tag );
        let has_blank_tag = tokens.iter().any( |token| token.is_empty() );
        let whole_tag_deprecated = registry.deprecated_tag( tag ).is_some();
        ParseContext {
            raw: tag.to_string(),
            tokens,
            illegal_characters,
            has_blank_tag,
            out_of_order: false,
            well_formed: true,
            whole_tag_deprecated,
            extensions: Vec::new(),
            private_use: Vec::new(),
        }
    }
}

/// The language tag engine: tokenises, classifies, validates and canonicalises [BCP 47 Language
/// Tag] strings against a loaded [`Registry`].
///
/// The registry is held as [`Rc`]`<`[`Registry`]`>` or [`Arc`]`<Registry>` (feature `sync`) and
/// never mutated, a single `TagParser` may serve any number of `parse()` calls, including
/// concurrent ones under `sync`.
///
/// # Examples
///
/// ```
/// use bcp47_registry::Registry;
/// use bcp47_tag::TagParser;
/// use std::rc::Rc;
///
/// let registry = Rc::new( Registry::from_text(
///     include_str!( "../tests/language-subtag-registry.txt" )
/// ) );
/// let parser = TagParser::new( &registry );
/// let results = parser.parse( "en-Latn-US" );
///
/// assert!( results.is_valid, "Supposed to be a valid tag." );
/// assert_eq!( results.canonicalise.as_deref(), Some( "en-US" ), "Latn must be suppressed." );
/// ```
///
/// [`Rc`]: std::rc::Rc
/// [`Arc`]: std::sync::Arc
/// [BCP 47 Language Tag]: https://www.rfc-editor.org/rfc/bcp/bcp47.txt
pub struct TagParser {
    registry: RefCount<Registry>,
}

impl TagParser {

    /// Creates a `TagParser` sharing the supplied registry.
    pub fn new( registry: &RefCount<Registry> ) -> TagParser {
        TagParser {
            registry: RefCount::clone( registry ),
        }
    }

    /// Parses one language tag, returning the classified subtags, any error messages, and the
    /// canonical form when the tag is well-formed.
    ///
    /// This method never fails, malformed input is reported through
    /// [`Results`]`::error_messages` with `is_valid` left false. The empty string is the one
    /// special case: it canonicalises to the empty string while remaining invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use bcp47_registry::Registry;
    /// use bcp47_tag::TagParser;
    /// use std::rc::Rc;
    ///
    /// let registry = Rc::new( Registry::from_text(
    ///     include_str!( "../tests/language-subtag-registry.txt" )
    /// ) );
    /// let parser = TagParser::new( &registry );
    /// let results = parser.parse( "de-1901-1901" );
    ///
    /// assert!( !results.is_valid, "Supposed to be an invalid tag." );
    /// assert_eq!(
    ///     results.error_messages[ 0 ].as_str(),
    ///     "Duplicate variant subtag: 1901",
    ///     "Wrong error message."
    /// );
    /// ```
    pub fn parse<T: AsRef<str>>( &self, tag: T ) -> Results {
        let tag = tag.as_ref();

        #[cfg( feature = "logging" )]
        trace!( "Parsing language tag \"{}\".", tag );

        let mut results = Results::new();
        if tag.is_empty() {
            // The empty input canonicalises to the empty string, yet stays invalid.
            results.canonicalise = Some( String::new() );
            return results;
        }
        let mut context = ParseContext::new( tag, &self.registry );
        if !context.whole_tag_deprecated && context.illegal_characters.is_empty() {
            classify( &mut context, &mut results );
        }
        validate( &self.registry, &mut context, &mut results );
        canonicalise( &self.registry, &context, &mut results );
        results.is_valid = results.canonicalise.is_some();
        results
    }
}
