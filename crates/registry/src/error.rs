// This file is part of `bcp47_registry-rizzen-yazston` crate. For the terms of use, please see the file
// called `LICENSE-BSD-3-Clause` at the top level of the `bcp47_registry-rizzen-yazston` crate.

use core::fmt::{ Display, Formatter, Result };
use std::error::Error; // Experimental in `core` crate.
use std::io::Error as IoError;

/// The `RegistryError` type consists of the follow:
///
/// * `Io`: Indicates the registry file is missing or unreadable, wraps the [`std::io::Error`].
///
/// An `Io` error means no registry is available, thus no tag engine can be constructed.
#[derive( Debug )]
#[non_exhaustive]
pub enum RegistryError {
    Io( IoError ),
}

impl Display for RegistryError {

    /// Simply call the display formatter of embedded error.
    fn fmt( &self, formatter: &mut Formatter ) -> Result {
        match *self {
            RegistryError::Io( ref error ) => error.fmt( formatter ),
        }
    }
}

// Source is embedded in the enum value.
impl Error for RegistryError {}

impl From<IoError> for RegistryError {
    fn from( error: IoError ) -> RegistryError {
        RegistryError::Io( error )
    }
}
