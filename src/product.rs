//! The table of known BitBox02 product identities.

use std::fmt;

use crate::constants::product::*;
use crate::{Edition, Mode, Model};

/// One (model, edition, mode) identity, distinguished on the bus by its product string.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Product {
	BitBox02Multi,
	BitBox02Btc,
	BitBox02MultiBootloader,
	BitBox02BtcBootloader,
	BitBox02PlusMulti,
	BitBox02PlusBtc,
	BitBox02PlusMultiBootloader,
	BitBox02PlusBtcBootloader,
}

impl Product {
	/// All known identities.
	pub const ALL: [Product; 8] = [
		Product::BitBox02Multi,
		Product::BitBox02MultiBootloader,
		Product::BitBox02Btc,
		Product::BitBox02BtcBootloader,
		Product::BitBox02PlusMulti,
		Product::BitBox02PlusMultiBootloader,
		Product::BitBox02PlusBtc,
		Product::BitBox02PlusBtcBootloader,
	];

	fn identity(self) -> (&'static str, Model, Edition, Mode) {
		match self {
			Product::BitBox02Multi => (BB02_MULTI, Model::BitBox02, Edition::Multi, Mode::Firmware),
			Product::BitBox02Btc => (BB02_BTC, Model::BitBox02, Edition::BtcOnly, Mode::Firmware),
			Product::BitBox02MultiBootloader => {
				(BB02_MULTI_BOOTLOADER, Model::BitBox02, Edition::Multi, Mode::Bootloader)
			}
			Product::BitBox02BtcBootloader => {
				(BB02_BTC_BOOTLOADER, Model::BitBox02, Edition::BtcOnly, Mode::Bootloader)
			}
			Product::BitBox02PlusMulti => {
				(BB02PLUS_MULTI, Model::BitBox02Plus, Edition::Multi, Mode::Firmware)
			}
			Product::BitBox02PlusBtc => {
				(BB02PLUS_BTC, Model::BitBox02Plus, Edition::BtcOnly, Mode::Firmware)
			}
			Product::BitBox02PlusMultiBootloader => {
				(BB02PLUS_MULTI_BOOTLOADER, Model::BitBox02Plus, Edition::Multi, Mode::Bootloader)
			}
			Product::BitBox02PlusBtcBootloader => {
				(BB02PLUS_BTC_BOOTLOADER, Model::BitBox02Plus, Edition::BtcOnly, Mode::Bootloader)
			}
		}
	}

	/// The product string the device advertises over USB.
	pub fn product_string(self) -> &'static str {
		self.identity().0
	}

	pub fn model(self) -> Model {
		self.identity().1
	}

	pub fn edition(self) -> Edition {
		self.identity().2
	}

	pub fn mode(self) -> Mode {
		self.identity().3
	}

	pub fn is_bootloader(self) -> bool {
		self.mode() == Mode::Bootloader
	}

	/// Classify an advertised product string.  Returns None for unknown strings.
	pub fn from_product_string(s: &str) -> Option<Product> {
		Product::ALL.iter().cloned().find(|p| p.product_string() == s)
	}

	/// All identities running in the given mode, across models and editions.
	pub fn with_mode(mode: Mode) -> impl Iterator<Item = Product> {
		let all: &'static [Product] = &Product::ALL;
		all.iter().cloned().filter(move |p| p.mode() == mode)
	}

	/// The four application firmware identities.
	pub fn firmware_products() -> impl Iterator<Item = Product> {
		Product::with_mode(Mode::Firmware)
	}

	/// The four bootloader identities.
	pub fn bootloader_products() -> impl Iterator<Item = Product> {
		Product::with_mode(Mode::Bootloader)
	}
}

impl fmt::Display for Product {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.mode() {
			Mode::Firmware => write!(f, "{} {}", self.model(), self.edition()),
			Mode::Bootloader => write!(f, "{} {} {}", self.model(), self.edition(), self.mode()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use std::collections::HashSet;

	#[test]
	fn product_strings_are_distinct() {
		let strings: HashSet<_> = Product::ALL.iter().map(|p| p.product_string()).collect();
		assert_eq!(strings.len(), Product::ALL.len());
	}

	#[test]
	fn identities_are_distinct() {
		let ids: HashSet<_> =
			Product::ALL.iter().map(|p| (p.model(), p.edition(), p.mode())).collect();
		assert_eq!(ids.len(), 8);
	}

	#[test]
	fn classify() {
		for p in Product::ALL.iter() {
			assert_eq!(Product::from_product_string(p.product_string()), Some(*p));
		}
		assert_eq!(
			Product::from_product_string("bb02-bootloader"),
			Some(Product::BitBox02MultiBootloader)
		);
		assert_eq!(Product::from_product_string("bb02p-btconly"), Some(Product::BitBox02PlusBtc));
		assert_eq!(Product::from_product_string("Trezor"), None);
		assert_eq!(Product::from_product_string(""), None);
		// Exact match only.
		assert_eq!(Product::from_product_string("bb02p-multi "), None);
	}

	#[test]
	fn modes() {
		let firmware: Vec<_> = Product::firmware_products().collect();
		assert_eq!(
			firmware,
			vec![
				Product::BitBox02Multi,
				Product::BitBox02Btc,
				Product::BitBox02PlusMulti,
				Product::BitBox02PlusBtc,
			]
		);
		let bootloaders: Vec<_> = Product::bootloader_products().collect();
		assert_eq!(
			bootloaders,
			vec![
				Product::BitBox02MultiBootloader,
				Product::BitBox02BtcBootloader,
				Product::BitBox02PlusMultiBootloader,
				Product::BitBox02PlusBtcBootloader,
			]
		);
		assert!(bootloaders.iter().all(|p| p.is_bootloader()));
		assert!(!firmware.iter().any(|p| p.is_bootloader()));
	}

	#[test]
	fn display() {
		assert_eq!(Product::BitBox02Btc.to_string(), "BitBox02 Bitcoin-only");
		assert_eq!(
			Product::BitBox02PlusMultiBootloader.to_string(),
			"BitBox02 Nova Multi bootloader"
		);
	}
}
