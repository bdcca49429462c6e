// This file is part of `bcp47_registry-rizzen-yazston` crate. For the terms of use, please see the file
// called LICENSE-BSD-3-Clause at the top level of the `bcp47_registry-rizzen-yazston` crate.

//! Loader for the IANA Language Subtag Registry.
//!
//! The registry is published by IANA as a plain text file of line-oriented records, as described in
//! [RFC 5646] section 3. The `Registry` type parses that file once and builds lookup maps per record
//! category, which the `bcp47_tag` crate consults while validating and canonicalising language tags.
//! After the load the `Registry` is immutable, thus it may be shared freely between concurrent
//! parses.
//!
//! Obtaining a copy of the registry file, and keeping it up to date, is left to the application.
//! The current file is published at the [IANA website].
//!
//! # Features
//!
//! Available features for `bcp47_registry` crate:
//!
//! * `logging`: To provide some logging information.
//!
//! # Examples
//!
//! ```
//! use bcp47_registry::Registry;
//!
//! let registry = Registry::from_text(
//!     "File-Date: 2025-08-16\n\
//!     %%\n\
//!     Type: language\n\
//!     Subtag: en\n\
//!     Description: English\n\
//!     Added: 2005-10-16\n\
//!     Suppress-Script: Latn\n"
//! );
//! let record = registry.language( "EN" ).expect( "The `en` record must be present." );
//!
//! assert_eq!( registry.file_date(), "2025-08-16", "Did not take the File-Date header." );
//! assert_eq!( record.suppress_script.as_deref(), Some( "Latn" ), "Missing Suppress-Script." );
//! ```
//!
//! [RFC 5646]: https://www.rfc-editor.org/rfc/rfc5646
//! [IANA website]: https://www.iana.org/assignments/language-subtag-registry

pub mod error;
pub use error::*;
pub mod registry;
pub use registry::*;
pub mod types;
pub use types::*;
