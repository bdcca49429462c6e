// This file is part of `bcp47_tag-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_tag-rizzen-yazston` crate.

use crate::parser::ParseContext;
use crate::types::titlecase;
use crate::Results;
use bcp47_registry::Registry;

// Applies the BCP 47 structural rules and the registry membership rules, collecting every failure
// as a message rather than failing. Only two checks terminate validation early: a whole tag
// registration and illegal characters. The remaining passes all run, even after a failure.
pub( crate ) fn validate( registry: &Registry, context: &mut ParseContext, results: &mut Results ) {

    // Whole tag registrations bypass subtag validation entirely.
    if let Some( record ) = registry.deprecated_tag( &context.raw ) {
        let message = match record.preferred_value.as_deref() {
            Some( preferred ) if !preferred.is_empty() => format!(
                "Deprecated language tag \"{}\" use \"{}\".", context.raw, preferred
            ),
            _ => format!( "Deprecated language tag \"{}\" do not use.", context.raw ),
        };
        results.error_messages.push( message );
        return;
    }

    if !context.illegal_characters.is_empty() {
        results.error_messages.push( format!(
            "Found illegal characters:\" {}\" in language tag.",
            context.illegal_characters.join( ", " )
        ) );
        context.well_formed = false;
        return;
    }

    if context.out_of_order {
        let rebuilt = rebuild( results );
        results.error_messages.push( format!(
            "Language sub tags incorrectly order. Should be \"{}\".", rebuilt
        ) );
        context.well_formed = false;
    }

    if context.has_blank_tag {
        results.error_messages.push(
            "Language tag has blank subtag(s) caused by more than one contiguous hyphen."
                .to_string(),
        );
        context.well_formed = false;
    }

    language( registry, context, results );
    regions( registry, context, results );
    extended( registry, context, results );
    scripts( registry, context, results );
    variants( registry, context, results );
    private_use( context, results );
}

// The expected subtag ordering, rebuilt from the classified roles.
fn rebuild( results: &Results ) -> String {
    let mut parts = Vec::<String>::new();
    parts.push( results.language_tag.clone() );
    parts.extend( results.extended_tags.iter().cloned() );
    parts.extend( results.script_tags.iter().cloned() );
    parts.extend( results.region_tags.iter().cloned() );
    parts.extend( results.variant_tags.iter().cloned() );
    parts.extend( results.extension_tags.iter().cloned() );
    parts.extend( results.private_use_tags.iter().cloned() );
    parts.join( "-" )
}

fn language( registry: &Registry, context: &mut ParseContext, results: &mut Results ) {
    if registry.language( &results.language_tag ).is_none()
        && !is_private_language( &results.language_tag )
    {
        let message = format!( "Language subtag \"{}\" is not valid", results.language_tag );
        results.error_messages.push( message );
        context.well_formed = false;
    }
}

fn regions( registry: &Registry, context: &mut ParseContext, results: &mut Results ) {
    if results.region_tags.len() > 1 {
        let message = format!(
            "More than one region subtag found \"{}\", only one is allowed.",
            results.region_tags.join( ", " )
        );
        results.error_messages.push( message );
        context.well_formed = false;
    }
    let mut invalid = Vec::<String>::new();
    for region in &results.region_tags {
        if registry.region( region ).is_none() && !is_private_region( region ) {
            invalid.push( region.clone() );
        }
    }
    if !invalid.is_empty() {
        let message = format!( "Region subtag(s) \"{}\" are not valid.", invalid.join( ", " ) );
        results.error_messages.push( message );
        context.well_formed = false;
    }
}

fn extended( registry: &Registry, context: &mut ParseContext, results: &mut Results ) {
    if results.extended_tags.len() > 1 {
        let message = format!(
            "More than one extended language subtag found \"{}\", only one is allowed.",
            results.extended_tags.join( ", " )
        );
        results.error_messages.push( message );
        context.well_formed = false;
    }
    let mut invalid = Vec::<String>::new();
    for extended in &results.extended_tags {
        match registry.extlang( extended ) {
            None => invalid.push( extended.clone() ),
            Some( record ) => {
                let language = &results.language_tag;
                if !record.prefixes.iter().any( |prefix| prefix.eq_ignore_ascii_case( language ) )
                {
                    let message = format!(
                        "Extended subtag \"{}\" should not be used with language subtag \"{}\".",
                        extended, language
                    );
                    results.error_messages.push( message );
                    context.well_formed = false;
                }
            }
        }
    }
    if !invalid.is_empty() {
        let message = format!( "Extended subtag(s) \"{}\" are not valid.", invalid.join( ", " ) );
        results.error_messages.push( message );
        context.well_formed = false;
    }
}

fn scripts( registry: &Registry, context: &mut ParseContext, results: &mut Results ) {
    if results.script_tags.len() > 1 {
        let message = format!(
            "More than one script subtag found \"{}\", only one is allowed.",
            results.script_tags.join( ", " )
        );
        results.error_messages.push( message );
        context.well_formed = false;
    }
    let mut invalid = Vec::<String>::new();
    for script in &results.script_tags {
        if registry.script( script ).is_none() && !is_private_script( script ) {
            invalid.push( script.clone() );
        }
    }
    if !invalid.is_empty() {
        let message = format!( "Script subtag(s) \"{}\" are not valid.", invalid.join( ", " ) );
        results.error_messages.push( message );
        context.well_formed = false;
    }
}

fn variants( registry: &Registry, context: &mut ParseContext, results: &mut Results ) {
    let mut duplicates = Vec::<String>::new();
    let mut seen = Vec::<String>::new();
    for variant in &results.variant_tags {
        let lower = variant.to_lowercase();
        if seen.contains( &lower ) {
            duplicates.push( variant.clone() );
        } else {
            seen.push( lower );
        }
    }
    for variant in &duplicates {
        let message = format!( "Duplicate variant subtag: {}", variant );
        results.error_messages.push( message );
        context.well_formed = false;
    }
    let mut invalid = Vec::<String>::new();
    for variant in &results.variant_tags {
        if registry.variant( variant ).is_none() {
            invalid.push( variant.clone() );
        }
    }
    if !invalid.is_empty() {
        let message = format!( "Variant subtag(s) \"{}\" are not valid.", invalid.join( ", " ) );
        results.error_messages.push( message );
        context.well_formed = false;
    }
    if !duplicates.is_empty() || !invalid.is_empty() {
        return; // No prefix checking against questionable variants.
    }

    // Each variant must be preceded by one of its registered prefixes. The preceding tag starts
    // as the language subtag alone and grows by each variant in turn, script and region subtags
    // never join it.
    let mut preceding = results.language_tag.clone();
    for variant in &results.variant_tags {
        if let Some( record ) = registry.variant( variant ) {
            if !record.prefixes.iter().any( |prefix| prefix.eq_ignore_ascii_case( &preceding ) ) {
                let patterns = record
                    .prefixes
                    .iter()
                    .map( |prefix| format!( "{}-{}", prefix, variant ) )
                    .collect::<Vec<String>>();
                let message = format!(
                    "Sub tags preceding variant \"{}\" did not match one of the following \
                    pattern(s): {}.",
                    variant,
                    patterns.join( ", " )
                );
                results.error_messages.push( message );
                context.well_formed = false;
            }
        }
        preceding.push( '-' );
        preceding.push_str( variant );
    }
}

fn private_use( context: &mut ParseContext, results: &mut Results ) {
    if context.private_use.len() > 1 {
        let list = context
            .private_use
            .iter()
            .map( |group| group.to_string() )
            .collect::<Vec<String>>();
        let message = format!(
            "More than one private use subtag found \"{}\", only one is allowed.",
            list.join( ", " )
        );
        results.error_messages.push( message );
        context.well_formed = false;
    }
}

// The private language range `qaa` to `qtz` of RFC 5646 section 2.2.1.
fn is_private_language( subtag: &str ) -> bool {
    let lower = subtag.to_lowercase();
    let lower = lower.as_str();
    lower.len() == 3 && ( "qaa"..="qtz" ).contains( &lower )
}

// The private region codes of ISO 3166-1: AA, ZZ, QM to QZ and XA to XZ.
fn is_private_region( subtag: &str ) -> bool {
    let upper = subtag.to_uppercase();
    let upper = upper.as_str();
    upper == "AA"
        || upper == "ZZ"
        || ( upper.len() == 2
            && ( ( "QM"..="QZ" ).contains( &upper ) || ( "XA"..="XZ" ).contains( &upper ) ) )
}

// The private script range `Qaaa` to `Qabx` of ISO 15924, compared in title case. Script tokens
// are four letters by classification, thus the title cased form always lines up with the range
// endpoints.
fn is_private_script( subtag: &str ) -> bool {
    let title = titlecase( subtag );
    let title = title.as_str();
    title.len() == 4 && ( "Qaaa"..="Qabx" ).contains( &title )
}
