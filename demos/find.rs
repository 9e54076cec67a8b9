extern crate bitbox02_devices;
extern crate fern;
extern crate log;

use bitbox02_devices::{parse_version, Enumerator};

fn setup_logger() {
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{}][{}] {}", record.target(), record.level(), message))
		})
		.level(log::LevelFilter::Debug)
		.chain(std::io::stderr())
		.apply()
		.unwrap();
}

fn main() {
	setup_logger();

	let enumerator = Enumerator::new();
	let devices = enumerator.list_all().unwrap();
	println!("Found {} devices: ", devices.len());
	for dev in devices.iter() {
		match dev.product() {
			Some(product) => println!("- {}: {}", product, dev),
			None => println!("- {}", dev),
		}
	}

	match enumerator.get_any_firmware_device() {
		Ok(dev) => println!("Firmware device: {}", dev),
		Err(e) => println!("No unique firmware device: {}", e),
	}
	match enumerator.get_any_bootloader_device() {
		Ok(dev) => println!("Bootloader device: {}", dev),
		Err(e) => println!("No unique bootloader device: {}", e),
	}

	if let Some(raw) = std::env::args().nth(1) {
		match parse_version(&raw) {
			Ok(version) => println!("Version: {}", version),
			Err(e) => println!("{}", e),
		}
	}
}
