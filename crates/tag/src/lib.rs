// This file is part of `bcp47_tag-rizzen-yazston` crate. For the terms of use, please see the file
// called LICENSE-BSD-3-Clause at the top level of the `bcp47_tag-rizzen-yazston` crate.

//! Language tag engine: tokeniser, classifier, validator and canonicaliser.
//!
//! The `TagParser` takes a string purporting to be a [BCP 47 Language Tag], classifies its
//! hyphen-separated subtags by role, validates them against the IANA Language Subtag Registry
//! (see the `bcp47_registry` crate) and the structural rules of [RFC 5646], and produces the
//! canonical form of the tag when it is well-formed.
//!
//! Parsing never fails: every structural or membership failure is collected as a human readable
//! message in the returned [`Results`], in the order the checks run. Only the registry load
//! itself can fail, before any parser exists.
//!
//! # Features
//!
//! Available features for `bcp47_tag` crate:
//!
//! * `logging`: To provide some logging information.
//!
//! * `sync`: Allow for rust's concurrency capabilities to be used. Use of [`Arc`] instead of
//! [`Rc`] for the shared registry.
//!
//! # Examples
//!
//! ```
//! use bcp47_registry::Registry;
//! use bcp47_tag::TagParser;
//! use std::rc::Rc;
//!
//! let registry = Rc::new( Registry::from_text(
//!     include_str!( "../tests/language-subtag-registry.txt" )
//! ) );
//! let parser = TagParser::new( &registry );
//! let results = parser.parse( "zh-cmn-Hans-CN" );
//!
//! assert!( results.is_valid, "Supposed to be a valid tag." );
//! assert_eq!(
//!     results.canonicalise.as_deref(),
//!     Some( "cmn-Hans-CN" ),
//!     "The extended language subtag must replace the language."
//! );
//! ```
//!
//! [`Arc`]: std::sync::Arc
//! [`Rc`]: std::rc::Rc
//! [BCP 47 Language Tag]: https://www.rfc-editor.org/rfc/bcp/bcp47.txt
//! [RFC 5646]: https://www.rfc-editor.org/rfc/rfc5646

pub mod parser;
pub use parser::*;
pub mod tokeniser;
pub use tokeniser::*;
pub mod types;
pub use types::*;

mod canonicaliser;
mod classifier;
mod validator;
