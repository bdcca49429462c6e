// This file is part of `bcp47_tag-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_tag-rizzen-yazston` crate.

//! Testing the validation passes and their exact messages.

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
fn out_of_order_subtags() {
    let results = parser().parse( "en-US-Latn" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "Language sub tags incorrectly order. Should be \"en-Latn-US\"." ],
        "Wrong error messages."
    );
}

#[test]
fn out_of_order_continues_validation() {
    // The order check does not terminate validation, later passes still report.
    let results = parser().parse( "en-US-Wxyz" );
    assert_eq!(
        results.error_messages,
        vec![
            "Language sub tags incorrectly order. Should be \"en-Wxyz-US\".",
            "Script subtag(s) \"Wxyz\" are not valid.",
        ],
        "Wrong error messages."
    );
}

#[test]
fn invalid_language() {
    let results = parser().parse( "xx" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "Language subtag \"xx\" is not valid" ],
        "The message carries no trailing period."
    );
}

#[test]
fn language_outside_private_range() {
    let results = parser().parse( "qzz" );
    assert!( !results.is_valid, "`qzz` lies outside the `qaa` to `qtz` range." );
    assert_eq!(
        results.error_messages,
        vec![ "Language subtag \"qzz\" is not valid" ],
        "Wrong error messages."
    );
}

#[test]
fn more_than_one_region() {
    let results = parser().parse( "en-US-GB" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "More than one region subtag found \"US, GB\", only one is allowed." ],
        "Wrong error messages."
    );
}

#[test]
fn invalid_region() {
    let results = parser().parse( "en-QL" );
    assert!( !results.is_valid, "`QL` lies outside the private region codes." );
    assert_eq!(
        results.error_messages,
        vec![ "Region subtag(s) \"QL\" are not valid." ],
        "Wrong error messages."
    );
}

#[test]
fn private_region_codes() {
    for tag in [ "en-AA", "en-ZZ", "en-QM", "en-qz", "en-XA", "en-XZ" ] {
        let results = parser().parse( tag );
        assert!( results.is_valid, "Supposed to be a valid tag: {}.", tag );
    }
}

#[test]
fn more_than_one_extended_language() {
    let results = parser().parse( "zh-cmn-yue" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "More than one extended language subtag found \"cmn, yue\", only one is allowed." ],
        "Wrong error messages."
    );
}

#[test]
fn extended_language_prefix_mismatch() {
    let results = parser().parse( "en-cmn" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "Extended subtag \"cmn\" should not be used with language subtag \"en\"." ],
        "Wrong error messages."
    );
}

#[test]
fn invalid_extended_language() {
    let results = parser().parse( "zh-abc" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "Extended subtag(s) \"abc\" are not valid." ],
        "Wrong error messages."
    );
}

#[test]
fn more_than_one_script() {
    let results = parser().parse( "tlh-Latn-Hebr" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "More than one script subtag found \"Latn, Hebr\", only one is allowed." ],
        "Wrong error messages."
    );
}

#[test]
fn invalid_script() {
    let results = parser().parse( "en-Wxyz" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "Script subtag(s) \"Wxyz\" are not valid." ],
        "Wrong error messages."
    );
}

#[test]
fn private_script_range() {
    let results = parser().parse( "en-qaaa" );
    assert!( results.is_valid, "Scripts of the `Qaaa` to `Qabx` range are valid." );
    assert_eq!( results.canonicalise.as_deref(), Some( "en-Qaaa" ), "Wrong canonical form." );
    let results = parser().parse( "en-Qaby" );
    assert!( !results.is_valid, "`Qaby` lies outside the `Qaaa` to `Qabx` range." );
}

#[test]
fn invalid_variant() {
    let results = parser().parse( "en-blahblah" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "Variant subtag(s) \"blahblah\" are not valid." ],
        "Wrong error messages."
    );
}

#[test]
fn variant_prefix_mismatch() {
    // The preceding tag the prefixes are compared against never includes the script subtag.
    let results = parser().parse( "zh-Latn-pinyin" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![
            "Sub tags preceding variant \"pinyin\" did not match one of the following \
            pattern(s): zh-Latn-pinyin, bo-Latn-pinyin."
        ],
        "Wrong error messages."
    );
}

#[test]
fn variant_prefix_chain() {
    let results = parser().parse( "sl-rozaj-biske" );
    assert!( results.is_valid, "Each variant grows the preceding tag for the next." );
    assert_eq!( results.canonicalise.as_deref(), Some( "sl-rozaj-biske" ), "Wrong canonical form." );
    let results = parser().parse( "sl-biske" );
    assert!( !results.is_valid, "`biske` requires the `sl-rozaj` prefix." );
    assert_eq!(
        results.error_messages,
        vec![
            "Sub tags preceding variant \"biske\" did not match one of the following \
            pattern(s): sl-rozaj-biske."
        ],
        "Wrong error messages."
    );
}

#[test]
fn duplicate_variant_skips_prefix_check() {
    let results = parser().parse( "de-1901-1901" );
    assert_eq!(
        results.error_messages,
        vec![ "Duplicate variant subtag: 1901" ],
        "No prefix messages expected once duplicates are found."
    );
}

#[test]
fn more_than_one_private_use() {
    let results = parser().parse( "en-x-foo-x-bar" );
    assert!( !results.is_valid, "Supposed to be an invalid tag." );
    assert_eq!(
        results.error_messages,
        vec![ "More than one private use subtag found \"x-foo, x-bar\", only one is allowed." ],
        "Wrong error messages."
    );
}

#[test]
fn multiple_extension_singletons_are_allowed() {
    let results = parser().parse( "en-a-bbb-b-ccc" );
    assert!( results.is_valid, "Distinct extension singletons are not a cardinality failure." );
    assert!( results.error_messages.is_empty(), "Supposed to be no errors." );
}

#[test]
fn deprecated_tag_without_preferred_value() {
    let results = parser().parse( "i-default" );
    assert!( results.is_valid, "A grandfathered tag still canonicalises." );
    assert_eq!( results.canonicalise.as_deref(), Some( "i-default" ), "Wrong canonical form." );
    assert_eq!(
        results.error_messages,
        vec![ "Deprecated language tag \"i-default\" do not use." ],
        "Wrong error messages."
    );
}

#[test]
fn deprecation_check_is_case_insensitive() {
    let results = parser().parse( "I-KLINGON" );
    assert_eq!(
        results.error_messages,
        vec![ "Deprecated language tag \"I-KLINGON\" use \"tlh\"." ],
        "The message carries the tag as received."
    );
}
