// This file is part of `bcp47_cli-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_cli-rizzen-yazston` crate.

//! Interactive validator for BCP 47 language tags.
//!
//! Loads the registry file named by the first command line argument, defaulting to
//! `language-subtag-registry.txt` in the working directory, then loops over a two item menu:
//! `1` validates one tag read from the next line, `0` quits.

use bcp47_registry::Registry;
use bcp47_tag::{ Results, TagParser };
use std::io::{ self, BufRead, Lines, StdinLock, Write };
use std::rc::Rc;

fn main() {
    let path = std::env::args()
        .nth( 1 )
        .unwrap_or_else( || "language-subtag-registry.txt".to_string() );
    let registry = match Registry::try_new( path.as_str() ) {
        Err( error ) => {
            eprintln!( "Unable to load the registry file {}: {}.", path, error );
            std::process::exit( 1 )
        }
        Ok( registry ) => Rc::new( registry ),
    };
    let parser = TagParser::new( &registry );
    let mut lines = io::stdin().lock().lines();
    loop {
        println!();
        println!( "1. Validate a language tag." );
        println!( "0. Quit." );
        let choice = match read_line( &mut lines ) {
            None => break, // End of input ends the session.
            Some( line ) => line,
        };
        match choice.trim().parse::<i32>() {
            Ok( 1 ) => {
                print!( "Enter a language tag: " );
                let _ = io::stdout().flush();
                let tag = match read_line( &mut lines ) {
                    None => break,
                    Some( line ) => line,
                };
                display( &parser.parse( tag.trim() ) );
            }
            Ok( 0 ) => break,
            _ => println!( "Please enter 1 or 0." ),
        }
    }
}

fn read_line( lines: &mut Lines<StdinLock<'static>> ) -> Option<String> {
    match lines.next() {
        Some( Ok( line ) ) => Some( line ),
        _ => None,
    }
}

fn display( results: &Results ) {
    println!( "language: {}", results.language_tag );
    println!( "Extended: {}", results.extended_tags.join( ", " ) );
    println!( "Scripts: {}", results.script_tags.join( ", " ) );
    println!( "Regions: {}", results.region_tags.join( ", " ) );
    println!( "Variants: {}", results.variant_tags.join( ", " ) );
    println!( "Extensions: {}", results.extension_tags.join( ", " ) );
    println!( "Private Use: {}", results.private_use_tags.join( ", " ) );
    println!( "Canonicalize: {}", results.canonicalise.as_deref().unwrap_or( "" ) );
    if results.error_messages.is_empty() {
        println!( "No Errors." );
    } else {
        println!( "Error List." );
        println!( "-----------" );
        for message in &results.error_messages {
            println!( "{}", message );
        }
    }
}
