// This file is part of `bcp47_tag-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_tag-rizzen-yazston` crate.

use crate::parser::ParseContext;
use crate::{ ExtensionGroup, Results, SubtagRole };

// Assigns every token a subtag role from its length, character classes and position, per the
// RFC 5646 section 2.1 syntax. Runs only for input that is non-empty, free of illegal characters
// and not registered as a whole tag. Tokens keep their received case.
//
// A singleton token consumes the following token as its group payload, the payload is never
// classified on its own. A role appearing after a later role marks the tag out of order.
pub( crate ) fn classify( context: &mut ParseContext, results: &mut Results ) {
    if context.tokens.is_empty() {
        return;
    }

    // The first token is the primary language subtag, whatever it looks like.
    results.language_tag = context.tokens[ 0 ].clone();
    let mut previous = SubtagRole::Language;
    let mut index = 1;
    while index < context.tokens.len() {
        let token = context.tokens[ index ].clone();
        if token.is_empty() {
            // Blank subtag, already flagged while tokenising.
            index += 1;
            continue;
        }
        let role = if token.len() == 1 {
            let singleton = token.chars().next().unwrap(); // The token has one character.
            let payload = match context.tokens.get( index + 1 ) {
                None => String::new(),
                Some( payload ) => payload.clone(),
            };
            index += 1; // The payload token is consumed by the singleton.
            let group = ExtensionGroup { singleton, payload };
            if singleton.eq_ignore_ascii_case( &'x' ) {
                results.private_use_tags.push( group.to_string() );
                context.private_use.push( group );
                SubtagRole::PrivateUse
            } else {
                results.extension_tags.push( group.to_string() );
                context.extensions.push( group );
                SubtagRole::Extension
            }
        } else if token.len() == 2 {
            results.region_tags.push( token );
            SubtagRole::Region
        } else if token.len() == 3 {
            if token.chars().all( |character| character.is_ascii_alphabetic() ) {
                results.extended_tags.push( token );
                SubtagRole::Extended
            } else {
                results.region_tags.push( token );
                SubtagRole::Region
            }
        } else if token.len() == 4 {
            if token.chars().all( |character| character.is_ascii_alphabetic() ) {
                results.script_tags.push( token );
                SubtagRole::Script
            } else {
                results.variant_tags.push( token );
                SubtagRole::Variant
            }
        } else {
            results.variant_tags.push( token );
            SubtagRole::Variant
        };
        if role < previous {
            context.out_of_order = true;
        }
        previous = role;
        index += 1;
    }
}
