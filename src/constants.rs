/// HID-related constants.
pub mod hid {
	pub const VENDOR_ID: u16 = 0x03EB;
	pub const PRODUCT_ID: u16 = 0x2403;
	// Reported by some development bootloaders. Not needed for production devices.
	pub const PRODUCT_ID_LEGACY: u16 = 0x2402;
	pub const PRODUCT_IDS: [u16; 2] = [PRODUCT_ID_LEGACY, PRODUCT_ID];

	/// Vendor-defined usage page, accepted regardless of the interface number.
	pub const VENDOR_USAGE_PAGE: u16 = 0xFFFF;

	/// HWW/general endpoint.
	pub const HWW_INTERFACE: i32 = 0;
	/// U2F endpoint.
	pub const U2F_INTERFACE: i32 = 1;
	pub const DEFAULT_INTERFACE: i32 = HWW_INTERFACE;
}

/// Advertised USB product strings.
pub mod product {
	pub const BB02_MULTI: &str = "X1-BTC-PSBT-Firmware";
	pub const BB02_BTC: &str = "X1-BTC-PSBT-FirmwareBTC";
	pub const BB02_MULTI_BOOTLOADER: &str = "bb02-bootloader";
	pub const BB02_BTC_BOOTLOADER: &str = "bb02btc-bootloader";

	pub const BB02PLUS_MULTI: &str = "bb02p-multi";
	pub const BB02PLUS_BTC: &str = "bb02p-btconly";
	pub const BB02PLUS_MULTI_BOOTLOADER: &str = "bb02p-bl-multi";
	pub const BB02PLUS_BTC_BOOTLOADER: &str = "bb02p-bl-btconly";
}
