//! Discovery and identification of BitBox02 hardware wallets on the USB HID bus, and parsing of
//! the firmware version strings they report.

mod constants;
mod devices;
mod error;
mod hid;
mod product;
mod version;

pub use constants::hid::{DEFAULT_INTERFACE, HWW_INTERFACE, U2F_INTERFACE};
pub use devices::{matches, DeviceInfo, DeviceSource, Enumerator};
pub use error::{Error, Result};
pub use hid::HidApiSource;
pub use product::Product;
pub use version::{parse_version, Version};

use std::fmt;

/// The hardware generation.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Model {
	BitBox02,
	BitBox02Plus,
}

impl fmt::Display for Model {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			Model::BitBox02 => "BitBox02",
			Model::BitBox02Plus => "BitBox02 Nova",
		})
	}
}

/// The firmware edition.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Edition {
	Multi,
	BtcOnly,
}

impl fmt::Display for Edition {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			Edition::Multi => "Multi",
			Edition::BtcOnly => "Bitcoin-only",
		})
	}
}

/// Whether the device runs its application firmware or sits in the bootloader.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Mode {
	Firmware,
	Bootloader,
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			Mode::Firmware => "firmware",
			Mode::Bootloader => "bootloader",
		})
	}
}

/// Scan for all devices advertising the given product string on the given interface.
pub fn list_devices(product_string: &str, interface_number: i32) -> Result<Vec<DeviceInfo>> {
	Enumerator::new().list_devices(product_string, interface_number)
}

/// Get the single device advertising the given product string.
/// Errors if there are multiple or no such devices.
/// For more fine-grained device selection, use `list_devices()`.
pub fn get_device(product_string: &str, interface_number: i32) -> Result<DeviceInfo> {
	Enumerator::new().get_device(product_string, interface_number)
}

/// Search for application firmware devices of every model and edition.
pub fn list_any_firmware_devices() -> Result<Vec<DeviceInfo>> {
	Enumerator::new().list_any_firmware_devices()
}

/// Get the single device running application firmware, whichever model or edition it is.
pub fn get_any_firmware_device() -> Result<DeviceInfo> {
	Enumerator::new().get_any_firmware_device()
}

/// Search for bootloader devices of every model and edition.
pub fn list_any_bootloader_devices() -> Result<Vec<DeviceInfo>> {
	Enumerator::new().list_any_bootloader_devices()
}

/// Get the single device in bootloader mode, whichever model or edition it is.
pub fn get_any_bootloader_device() -> Result<DeviceInfo> {
	Enumerator::new().get_any_bootloader_device()
}
