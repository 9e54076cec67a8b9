//! Device enumeration and selection.
//!
//! A scan lists every HID device the host reports and keeps the ones that identify as the
//! requested BitBox02 product.  Selection of a single device never guesses: if zero or several
//! devices match, an error is returned so that no operation is sent to the wrong device.

use std::fmt;

use log::{debug, trace, warn};

use crate::constants::hid::{
	DEFAULT_INTERFACE, PRODUCT_IDS, PRODUCT_ID_LEGACY, VENDOR_ID, VENDOR_USAGE_PAGE,
};
use crate::error::{Error, Result};
use crate::hid::HidApiSource;
use crate::product::Product;
use crate::Mode;

/// A HID device as reported by the host.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DeviceInfo {
	pub vendor_id: u16,
	pub product_id: u16,
	/// The USB interface number, -1 if the platform does not report one.
	pub interface_number: i32,
	pub usage_page: u16,
	pub product_string: String,
	pub serial_number: String,
	/// Opaque platform path, used to open the device.
	pub path: Vec<u8>,
}

impl DeviceInfo {
	/// The product identity advertised by this device, if it is a known one.
	pub fn product(&self) -> Option<Product> {
		Product::from_product_string(&self.product_string)
	}
}

impl fmt::Display for DeviceInfo {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"{} (serial nb: {}) (path: {})",
			self.product_string,
			self.serial_number,
			String::from_utf8_lossy(&self.path)
		)
	}
}

/// A provider of snapshots of the attached HID devices.
pub trait DeviceSource {
	fn enumerate(&self) -> Result<Vec<DeviceInfo>>;
}

impl DeviceSource for [DeviceInfo] {
	fn enumerate(&self) -> Result<Vec<DeviceInfo>> {
		Ok(self.to_vec())
	}
}

impl DeviceSource for Vec<DeviceInfo> {
	fn enumerate(&self) -> Result<Vec<DeviceInfo>> {
		Ok(self.clone())
	}
}

impl<'a, S: DeviceSource + ?Sized> DeviceSource for &'a S {
	fn enumerate(&self) -> Result<Vec<DeviceInfo>> {
		(**self).enumerate()
	}
}

/// Whether the device is a BitBox02 advertising `product_string` on the requested interface.
///
/// A device on the vendor-defined usage page is accepted whatever its interface number, as some
/// platforms expose the logical interface only through the usage page.
pub fn matches(dev: &DeviceInfo, product_string: &str, interface_number: i32) -> bool {
	dev.vendor_id == VENDOR_ID
		&& PRODUCT_IDS.contains(&dev.product_id)
		&& (dev.usage_page == VENDOR_USAGE_PAGE || dev.interface_number == interface_number)
		&& dev.product_string == product_string
}

/// Pick the only device from the list.
fn unique(mut devices: Vec<DeviceInfo>) -> Result<DeviceInfo> {
	match devices.len() {
		0 => Err(Error::NoneFound),
		1 => Ok(devices.remove(0)),
		n => {
			debug!("{} devices match, refusing to pick one", n);
			Err(Error::TooManyFound(n))
		}
	}
}

/// Lists and selects BitBox02 devices from a `DeviceSource`.
#[derive(Debug, Clone)]
pub struct Enumerator<S> {
	source: S,
}

impl Enumerator<HidApiSource> {
	/// An enumerator that scans the host's HID subsystem.
	pub fn new() -> Enumerator<HidApiSource> {
		Enumerator::with_source(HidApiSource)
	}
}

impl Default for Enumerator<HidApiSource> {
	fn default() -> Enumerator<HidApiSource> {
		Enumerator::new()
	}
}

impl<S: DeviceSource> Enumerator<S> {
	pub fn with_source(source: S) -> Enumerator<S> {
		Enumerator {
			source: source,
		}
	}

	/// Scan for all devices advertising `product_string` on `interface_number`.
	///
	/// The order is whatever the host reports.
	pub fn list_devices(
		&self,
		product_string: &str,
		interface_number: i32,
	) -> Result<Vec<DeviceInfo>> {
		let mut found = Vec::new();
		for dev in self.source.enumerate()? {
			if !matches(&dev, product_string, interface_number) {
				trace!("Skipping {:04x}:{:04x} {:?}", dev.vendor_id, dev.product_id, dev);
				continue;
			}
			if dev.product_id == PRODUCT_ID_LEGACY {
				warn!("Device {} reports legacy product id {:04x}", dev, dev.product_id);
			}
			trace!("Found {}", dev);
			found.push(dev);
		}
		debug!("Found {} devices with product string {:?}", found.len(), product_string);
		Ok(found)
	}

	/// Get the only device advertising `product_string` on `interface_number`.
	/// Errors if there are multiple or no such devices.
	pub fn get_device(&self, product_string: &str, interface_number: i32) -> Result<DeviceInfo> {
		unique(self.list_devices(product_string, interface_number)?)
	}

	/// Scan for all devices of the given identity on the default interface.
	pub fn list_product(&self, product: Product) -> Result<Vec<DeviceInfo>> {
		self.list_devices(product.product_string(), DEFAULT_INTERFACE)
	}

	/// Get the only device of the given identity on the default interface.
	pub fn get_product(&self, product: Product) -> Result<DeviceInfo> {
		self.get_device(product.product_string(), DEFAULT_INTERFACE)
	}

	/// Union of the scans for every identity yielded by `products`, in table order.
	fn list_products<I>(&self, products: I) -> Result<Vec<DeviceInfo>>
	where
		I: IntoIterator<Item = Product>,
	{
		let mut found = Vec::new();
		for product in products {
			found.extend(self.list_product(product)?);
		}
		Ok(found)
	}

	fn list_mode(&self, mode: Mode) -> Result<Vec<DeviceInfo>> {
		self.list_products(Product::with_mode(mode))
	}

	/// Search for application firmware devices of both models and editions.
	pub fn list_any_firmware_devices(&self) -> Result<Vec<DeviceInfo>> {
		self.list_mode(Mode::Firmware)
	}

	/// Get the only device running application firmware, of any model or edition.
	pub fn get_any_firmware_device(&self) -> Result<DeviceInfo> {
		unique(self.list_any_firmware_devices()?)
	}

	/// Search for bootloader devices of both models and editions.
	pub fn list_any_bootloader_devices(&self) -> Result<Vec<DeviceInfo>> {
		self.list_mode(Mode::Bootloader)
	}

	/// Get the only device in bootloader mode, of any model or edition.
	pub fn get_any_bootloader_device(&self) -> Result<DeviceInfo> {
		unique(self.list_any_bootloader_devices()?)
	}

	/// Search for devices of every known identity, in either mode.
	pub fn list_all(&self) -> Result<Vec<DeviceInfo>> {
		self.list_products(Product::ALL.iter().cloned())
	}
}
