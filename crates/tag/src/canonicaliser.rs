// This file is part of `bcp47_tag-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_tag-rizzen-yazston` crate.

use crate::parser::ParseContext;
use crate::types::titlecase;
use crate::Results;
use bcp47_registry::Registry;

// Produces the canonical form per RFC 5646 section 4.5: preferred values replace deprecated
// subtags, suppressed scripts are dropped, extension groups are ordered by singleton, and each
// role takes its canonical case. Runs only while the tag is well-formed.
pub( crate ) fn canonicalise( registry: &Registry, context: &ParseContext, results: &mut Results ) {
    if !context.well_formed {
        return;
    }

    // Whole tag registrations canonicalise to their preferred value, or to their registered form
    // when no replacement exists.
    if let Some( record ) = registry.deprecated_tag( &context.raw ) {
        let canonical = match record.preferred_value.as_deref() {
            Some( preferred ) if !preferred.is_empty() => preferred.to_string(),
            _ => record.tag.clone(),
        };
        results.canonicalise = Some( canonical );
        return;
    }

    // The effective language: the language's registered preferred value, then possibly the
    // extended language subtag's preferred value when its first prefix names the current
    // language. The extended subtag itself never reaches the canonical form.
    let mut language = results.language_tag.clone();
    if let Some( record ) = registry.language( &language ) {
        if let Some( preferred ) = record.preferred_value.as_deref() {
            if !preferred.is_empty() {
                language = preferred.to_string();
            }
        }
    }
    if let Some( extended ) = results.extended_tags.first() {
        if let Some( record ) = registry.extlang( extended ) {
            if let Some( preferred ) = record.preferred_value.as_deref() {
                if !preferred.is_empty() {
                    if let Some( first_prefix ) = record.prefixes.first() {
                        if first_prefix.eq_ignore_ascii_case( &language ) {
                            language = preferred.to_string();
                        }
                    }
                }
            }
        }
    }
    let mut canonical = language.to_lowercase();

    // Script, unless the input language's record suppresses it.
    if let Some( script ) = results.script_tags.first() {
        let suppressed = match registry.language( &results.language_tag ) {
            None => false,
            Some( record ) => match record.suppress_script.as_deref() {
                None => false,
                Some( suppress ) => suppress.eq_ignore_ascii_case( script ),
            },
        };
        if !suppressed {
            canonical.push( '-' );
            canonical.push_str( titlecase( script ).as_str() );
        }
    }

    // Region, preferring the registered replacement, else the registered form, else uppercased.
    if let Some( region ) = results.region_tags.first() {
        canonical.push( '-' );
        match registry.region( region ) {
            None => canonical.push_str( region.to_uppercase().as_str() ),
            Some( record ) => match record.preferred_value.as_deref() {
                Some( preferred ) if !preferred.is_empty() => canonical.push_str( preferred ),
                _ => canonical.push_str( record.tag.as_str() ),
            },
        }
    }

    // Variants in input order, in their registered form. The lookups succeeded during
    // validation.
    for variant in &results.variant_tags {
        if let Some( record ) = registry.variant( variant ) {
            canonical.push( '-' );
            canonical.push_str( record.tag.as_str() );
        }
    }

    // Extension groups ordered by singleton. The sort is stable, groups of an equal singleton
    // keep their input order. A singleton that arrived without a payload is dropped.
    let mut extensions = context.extensions.clone();
    extensions.sort_by_key( |group| group.singleton.to_ascii_lowercase() );
    for group in &extensions {
        if group.payload.is_empty() {
            continue;
        }
        canonical.push( '-' );
        canonical.push_str( group.to_string().as_str() );
    }

    // Only the first private use group, well-formedness rejects further ones.
    if let Some( group ) = context.private_use.first() {
        if !group.payload.is_empty() {
            canonical.push( '-' );
            canonical.push_str( group.to_string().as_str() );
        }
    }

    results.canonicalise = Some( canonical );
}
