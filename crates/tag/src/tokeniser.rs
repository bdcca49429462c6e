// This file is part of `bcp47_tag-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_tag-rizzen-yazston` crate.

/// Splits a language tag into its hyphen-separated tokens, and scans for illegal characters.
///
/// Returns the pair `( tokens, illegal_characters )`. Empty tokens resulting from adjacent,
/// leading or trailing hyphens are preserved, the classifier flags them as blank subtags. No case
/// normalisation takes place here, tokens keep the case they were received in.
///
/// Every character that is not an ASCII letter, ASCII digit or `-` is collected into
/// `illegal_characters` as a one character string, duplicates retained in order of occurrence.
///
/// # Examples
///
/// ```
/// use bcp47_tag::tokenise;
///
/// let ( tokens, illegal ) = tokenise( "en-Latn-US" );
///
/// assert_eq!( tokens, vec![ "en", "Latn", "US" ], "Must split on every hyphen." );
/// assert!( illegal.is_empty(), "No illegal characters in this tag." );
/// ```
pub fn tokenise( tag: &str ) -> ( Vec<String>, Vec<String> ) {
    let tokens = tag.split( '-' ).map( |token| token.to_string() ).collect();
    let illegal_characters = tag
        .chars()
        .filter( |character| !character.is_ascii_alphanumeric() && *character != '-' )
        .map( |character| character.to_string() )
        .collect();
    ( tokens, illegal_characters )
}
