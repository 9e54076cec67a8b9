//! # Error Handling

use std::{error, fmt, result};

/// BitBox02 device error.
#[derive(Debug)]
pub enum Error {
	/// Error from hidapi.
	Hid(hidapi::HidError),
	/// No matching device was plugged in.
	NoneFound,
	/// More than one matching device was plugged in.
	TooManyFound(usize),
	/// The device reported a version string that could not be parsed.
	MalformedVersion(String),
}

impl From<hidapi::HidError> for Error {
	fn from(e: hidapi::HidError) -> Error {
		Error::Hid(e)
	}
}

impl error::Error for Error {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match *self {
			Error::Hid(ref e) => Some(e),
			_ => None,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Error::Hid(ref e) => fmt::Display::fmt(e, f),
			Error::NoneFound => f.write_str("found 0 devices"),
			Error::TooManyFound(count) => write!(f, "found {} devices", count),
			Error::MalformedVersion(ref raw) => {
				write!(f, "could not parse version string from string: {}", raw)
			}
		}
	}
}

/// Result type used in this crate.
pub type Result<T> = result::Result<T, Error>;
