// This file is part of `bcp47_tag-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_tag-rizzen-yazston` crate.

//! Testing the canonical forms per RFC 5646 section 4.5.

use bcp47_registry::Registry;
use bcp47_tag::TagParser;
use std::rc::Rc;

fn parser() -> TagParser {
    let registry = Rc::new( Registry::from_text(
        include_str!( "language-subtag-registry.txt" )
    ) );
    TagParser::new( &registry )
}

#[test]
fn language_preferred_value() {
    let results = parser().parse( "iw" );
    assert_eq!( results.canonicalise.as_deref(), Some( "he" ), "`iw` must become `he`." );
}

#[test]
fn preferred_language_keeps_suppressed_script_rule() {
    // The suppressed script is read off the input language's record, `iw` suppresses Hebr.
    let results = parser().parse( "iw-Hebr" );
    assert_eq!( results.canonicalise.as_deref(), Some( "he" ), "Hebr must be omitted." );
}

#[test]
fn extended_language_replaces_language() {
    let results = parser().parse( "zh-yue-Hant" );
    assert_eq!(
        results.canonicalise.as_deref(),
        Some( "yue-Hant" ),
        "The extended language subtag must replace the language."
    );
}

#[test]
fn region_preferred_value() {
    let results = parser().parse( "en-BU" );
    assert_eq!( results.canonicalise.as_deref(), Some( "en-MM" ), "`BU` must become `MM`." );
}

#[test]
fn unregistered_private_region_is_uppercased() {
    let results = parser().parse( "en-qm" );
    assert_eq!( results.canonicalise.as_deref(), Some( "en-QM" ), "Wrong canonical form." );
}

#[test]
fn numeric_region() {
    let results = parser().parse( "en-419" );
    assert_eq!( results.canonicalise.as_deref(), Some( "en-419" ), "Wrong canonical form." );
}

#[test]
fn script_takes_title_case() {
    let results = parser().parse( "tlh-lATN" );
    assert_eq!( results.canonicalise.as_deref(), Some( "tlh-Latn" ), "Wrong canonical form." );
}

#[test]
fn variants_take_their_registered_form() {
    let results = parser().parse( "en-GB-OXENDICT" );
    assert_eq!(
        results.canonicalise.as_deref(),
        Some( "en-GB-oxendict" ),
        "The stored form of the variant must be used."
    );
}

#[test]
fn extension_groups_sort_by_singleton() {
    let results = parser().parse( "en-b-ccc-a-bbb" );
    assert_eq!(
        results.canonicalise.as_deref(),
        Some( "en-a-bbb-b-ccc" ),
        "Extension groups must be ordered by singleton."
    );
}

#[test]
fn extension_payload_keeps_its_case() {
    let results = parser().parse( "en-a-BBB-x-Priv" );
    assert_eq!(
        results.canonicalise.as_deref(),
        Some( "en-a-BBB-x-Priv" ),
        "Extension and private use payloads keep their received case."
    );
}

#[test]
fn grandfathered_preferred_values() {
    let results = parser().parse( "art-lojban" );
    assert_eq!( results.canonicalise.as_deref(), Some( "jbo" ), "Wrong canonical form." );
    let results = parser().parse( "en-GB-oed" );
    assert_eq!(
        results.canonicalise.as_deref(),
        Some( "en-GB-oxendict" ),
        "Wrong canonical form."
    );
}

#[test]
fn redundant_preferred_value() {
    let results = parser().parse( "zh-cmn-Hans" );
    assert_eq!( results.canonicalise.as_deref(), Some( "cmn-Hans" ), "Wrong canonical form." );
}

#[test]
fn singleton_without_payload_is_dropped() {
    let results = parser().parse( "en-x" );
    assert!( results.is_valid, "A payload-less singleton is not a structural failure." );
    assert_eq!( results.canonicalise.as_deref(), Some( "en" ), "Wrong canonical form." );
}

#[test]
fn canonicalisation_is_idempotent() {
    let inputs = [
        "en-Latn-US",
        "zh-cmn-Hans-CN",
        "iw-Hebr",
        "en-b-ccc-a-bbb",
        "sl-rozaj-biske",
        "en-BU",
        "i-klingon",
        "EN-latn-us",
    ];
    for input in inputs {
        let first = parser().parse( input );
        let canonical = first.canonicalise.as_deref()
            .unwrap_or_else( || panic!( "Supposed to canonicalise: {}.", input ) )
            .to_string();
        let second = parser().parse( canonical.as_str() );
        assert_eq!(
            second.canonicalise.as_deref(),
            Some( canonical.as_str() ),
            "Reparsing the canonical form must leave it unchanged: {}.",
            input
        );
    }
}

#[test]
fn canonical_form_is_ascii() {
    for input in [ "en-Latn-US", "zh-cmn-Hans-CN", "en-x-Priv", "de-DE-1901" ] {
        let results = parser().parse( input );
        let canonical = results.canonicalise.expect( "Supposed to canonicalise." );
        assert!(
            canonical.chars().all( |c| c.is_ascii_alphanumeric() || c == '-' ),
            "Canonical forms contain only ASCII letters, digits and hyphens: {}.",
            canonical
        );
    }
}
