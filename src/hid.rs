use log::debug;

use crate::devices::{DeviceInfo, DeviceSource};
use crate::error::Result;

/// The host HID subsystem, queried through hidapi.
///
/// Every call to `enumerate` initializes hidapi anew and takes a fresh snapshot of the attached
/// devices; nothing is cached between scans.
#[derive(Debug, Default, Clone, Copy)]
pub struct HidApiSource;

impl From<&hidapi::DeviceInfo> for DeviceInfo {
	fn from(dev: &hidapi::DeviceInfo) -> DeviceInfo {
		DeviceInfo {
			vendor_id: dev.vendor_id(),
			product_id: dev.product_id(),
			interface_number: dev.interface_number(),
			usage_page: dev.usage_page(),
			product_string: dev.product_string().unwrap_or_default().to_owned(),
			serial_number: dev.serial_number().unwrap_or_default().to_owned(),
			path: dev.path().to_bytes().to_vec(),
		}
	}
}

impl DeviceSource for HidApiSource {
	fn enumerate(&self) -> Result<Vec<DeviceInfo>> {
		let hidapi = hidapi::HidApi::new()?;
		let devices: Vec<DeviceInfo> = hidapi.device_list().map(DeviceInfo::from).collect();
		debug!("HID scan reported {} devices", devices.len());
		Ok(devices)
	}
}
