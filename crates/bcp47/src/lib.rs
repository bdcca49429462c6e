// This file is part of `bcp47-rizzen-yazston` crate. For the terms of use, please see the file
// called LICENSE-BSD-3-Clause at the top level of the `bcp47-rizzen-yazston` crate.

//! Welcome to the **`bcp47`** crate of the *BCP 47 Language Tags* project.
//!
//! This is the main meta-crate of the project.
//!
//! This convenience meta crate contains the available crates:
//!
//! * `bcp47_registry`: Loader for the IANA Language Subtag Registry file, with per category
//! lookup maps,
//!
//! * `bcp47_tag`: The language tag engine: tokeniser, classifier, validator and canonicaliser.
//!
//! NOTE: All these crates on `crates.io` have the names appended with the suffix `-rizzen-yazston`
//! to distinguish them from BCP 47 crates created by other authors.
//!
//! # Usage
//!
//! For most use cases, just the use of the `bcp47-rizzen-yazston` crate will be sufficient, though
//! the individual crates can be selected individually if the entire project is not required.
//!
//! ## Features
//!
//! Available features for `bcp47` crate:
//!
//! * `logging`: To provide some logging information.
//!
//! * `sync`: Allow for rust's concurrency capabilities to be used. Use of [`Arc`] instead of
//! [`Rc`] for the shared registry.
//!
//! ## Examples
//!
//! See the various component crates for usage examples.
//!
//! [`Arc`]: std::sync::Arc
//! [`Rc`]: std::rc::Rc

#[cfg( doc )]
use std::sync::Arc;

#[cfg( doc )]
use std::rc::Rc;

pub use bcp47_registry as registry;
pub use bcp47_tag as tag;
