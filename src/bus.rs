//! # Address Bus
//!
//! The [`Bus`] presents a single 64 KiB address space backed by an ordered list
//! of attached [`Addressable`] devices.
//!
//! ## Address Routing
//!
//! When the CPU reads or writes an address:
//! 1. Iterate through attached devices in attachment order
//! 2. Skip devices whose range does not contain the address
//! 3. Offer the access to the device; stop at the first one that accepts it
//! 4. If nobody accepts, reads yield `None` (the CPU sees 0x00) and writes are dropped
//!
//! No overlap validation is done at attach time: a later device that shares an
//! address with an earlier one is only reached when the earlier one declines.
//!
//! The device list is only meant to change during setup. Attaching while a
//! CPU is being ticked from another context is undefined; the bus is not `Sync`.

use crate::Addressable;
use log::trace;

/// Value seen by the CPU when no device answers a read.
pub const OPEN_BUS_VALUE: u8 = 0x00;

/// Ordered collection of devices sharing one 16-bit address space.
///
/// # Examples
///
/// ```
/// use rt6502::{Addressable, Bus, RamDevice, RomDevice};
///
/// let mut bus = Bus::new();
/// bus.attach(Box::new(RamDevice::new(0x0000, 0x07FF).unwrap()));
/// bus.attach(Box::new(RomDevice::new(0xFF00, vec![0xEA; 256]).unwrap()));
///
/// assert!(bus.write(0x0200, 0x42));
/// assert_eq!(bus.read(0x0200), Some(0x42));
///
/// // ROM declines writes
/// assert!(!bus.write(0xFF00, 0x00));
/// assert_eq!(bus.read(0xFF00), Some(0xEA));
///
/// // Nothing attached at 0x8000
/// assert_eq!(bus.read(0x8000), None);
/// assert_eq!(bus.read_or_open(0x8000), 0x00);
/// ```
#[derive(Default)]
pub struct Bus {
    devices: Vec<Box<dyn Addressable>>,
}

impl Bus {
    /// Creates a bus with no devices attached.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Appends `device` to the routing list.
    pub fn attach(&mut self, device: Box<dyn Addressable>) {
        trace!(
            "attaching device at ${:04X}-${:04X} (r={}, w={})",
            device.address_start(),
            device.address_end(),
            device.is_readable(),
            device.is_writable()
        );
        self.devices.push(device);
    }

    /// Number of attached devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns true if no device is attached.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Reads `address`, falling back to [`OPEN_BUS_VALUE`] when unclaimed.
    pub fn read_or_open(&self, address: u16) -> u8 {
        self.read(address).unwrap_or(OPEN_BUS_VALUE)
    }
}

impl Addressable for Bus {
    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        true
    }

    fn address_start(&self) -> u16 {
        0x0000
    }

    fn address_end(&self) -> u16 {
        0xFFFF
    }

    fn read(&self, address: u16) -> Option<u8> {
        let data = self
            .devices
            .iter()
            .filter(|device| device.is_readable() && device.contains(address))
            .find_map(|device| device.read(address));

        if data.is_none() {
            trace!("unclaimed read at ${address:04X}");
        }
        data
    }

    fn write(&mut self, address: u16, data: u8) -> bool {
        for device in &mut self.devices {
            if !device.is_writable() || !device.contains(address) {
                continue;
            }
            if device.write(address, data) {
                return true;
            }
        }

        trace!("unclaimed write of ${data:02X} at ${address:04X}");
        false
    }
}
