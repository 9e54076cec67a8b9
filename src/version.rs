//! Parsing of the version strings reported by the firmware, e.g. "v9.10.0-rc1".

use log::debug;

pub use semver::Version;

use crate::error::{Error, Result};

/// Whether `s` starts with three dot-separated decimal components.
fn starts_with_triple(s: &str) -> bool {
	let bytes = s.as_bytes();
	let mut pos = 0;
	for component in 0..3 {
		if component > 0 {
			if bytes.get(pos) != Some(&b'.') {
				return false;
			}
			pos += 1;
		}
		let start = pos;
		while bytes.get(pos).map_or(false, u8::is_ascii_digit) {
			pos += 1;
		}
		if pos == start {
			return false;
		}
	}
	true
}

/// Locate the first "vMAJOR.MINOR.PATCH..." and return what follows the "v", up to the end of
/// the line.
fn find_version(raw: &str) -> Option<&str> {
	for (i, _) in raw.match_indices('v') {
		let rest = &raw[i + 1..];
		if starts_with_triple(rest) {
			let end = rest.find('\n').unwrap_or_else(|| rest.len());
			return Some(&rest[..end]);
		}
	}
	None
}

/// Extract and parse the semantic version from a firmware version string.
///
/// Everything after the first "v" that is followed by three dot-separated numbers must be a
/// valid semantic version, including any pre-release and build metadata.  Anything else is
/// rejected with `Error::MalformedVersion`.
pub fn parse_version(raw: &str) -> Result<Version> {
	let version = find_version(raw).ok_or_else(|| Error::MalformedVersion(raw.to_owned()))?;
	Version::parse(version).map_err(|e| {
		debug!("Invalid semantic version {:?} in {:?}: {}", version, raw, e);
		Error::MalformedVersion(raw.to_owned())
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	use semver::{BuildMetadata, Prerelease};

	fn assert_malformed(raw: &str) {
		match parse_version(raw) {
			Err(Error::MalformedVersion(ref s)) if s == raw => {}
			r => panic!("unexpected result for {:?}: {:?}", raw, r),
		}
	}

	#[test]
	fn plain() {
		assert_eq!(parse_version("v1.2.3").unwrap(), Version::new(1, 2, 3));
		assert_eq!(parse_version("v0.0.0").unwrap(), Version::new(0, 0, 0));
	}

	#[test]
	fn embedded_with_prerelease() {
		let v = parse_version("firmware v9.10.0-rc1").unwrap();
		assert_eq!((v.major, v.minor, v.patch), (9, 10, 0));
		assert_eq!(v.pre, Prerelease::new("rc1").unwrap());
		assert_eq!(v.build, BuildMetadata::EMPTY);
	}

	#[test]
	fn build_metadata() {
		let v = parse_version("v1.2.3-rc.1+build").unwrap();
		assert_eq!(v.pre.as_str(), "rc.1");
		assert_eq!(v.build.as_str(), "build");
	}

	#[test]
	fn first_match_wins() {
		assert_eq!(parse_version("version v1.2 then v3.4.5").unwrap(), Version::new(3, 4, 5));
		assert!(parse_version("v4.5.6 v7.8.9").is_err());
		assert_eq!(parse_version("vv2.0.1").unwrap(), Version::new(2, 0, 1));
	}

	#[test]
	fn stops_at_line_break() {
		assert_eq!(parse_version("v1.2.3\ncommit abc").unwrap(), Version::new(1, 2, 3));
	}

	#[test]
	fn malformed() {
		assert_malformed("no version here");
		assert_malformed("");
		assert_malformed("1.2.3");
		assert_malformed("V1.2.3");
		assert_malformed("v1.2");
		assert_malformed("v1..2.3");
		assert_malformed("v1.2.x");
		assert_malformed("v01.2.3");
		assert_malformed("v1.2.3-");
		assert_malformed("v1.2.3-rc..1");
		assert_malformed("v1.2.3 (dirty)");
	}

	#[test]
	fn round_trip() {
		let cases: &[(u64, u64, u64, Option<&str>)] = &[
			(0, 0, 1, None),
			(1, 2, 3, None),
			(9, 10, 0, Some("rc1")),
			(9, 16, 0, Some("alpha.1")),
			(10, 0, 123, Some("0.3.7")),
			(4294967296, 0, 0, Some("x-y-z")),
		];
		for &(major, minor, patch, suffix) in cases {
			let (raw, pre) = match suffix {
				Some(s) => {
					let raw = format!("v{}.{}.{}-{}", major, minor, patch, s);
					(raw, Prerelease::new(s).unwrap())
				}
				None => (format!("v{}.{}.{}", major, minor, patch), Prerelease::EMPTY),
			};
			let expected = Version {
				major: major,
				minor: minor,
				patch: patch,
				pre: pre,
				build: BuildMetadata::EMPTY,
			};
			assert_eq!(parse_version(&raw).unwrap(), expected, "{}", raw);
			assert_eq!(format!("v{}", expected), raw);
		}
	}

	#[test]
	fn ordering() {
		let a = parse_version("v1.2.3").unwrap();
		let b = parse_version("v1.3.0").unwrap();
		let c = parse_version("v2.0.0").unwrap();
		assert!(a < b);
		assert!(b < c);
		assert!(a < c);
		assert!(parse_version("v2.0.0-rc1").unwrap() < c);
	}
}
