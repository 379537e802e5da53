//! # Addressable Capability
//!
//! This module provides the `Addressable` trait that decouples the CPU from the
//! peripherals it talks to. Anything that answers reads and writes over an
//! inclusive 16-bit address range can be attached to a [`Bus`](crate::Bus):
//!
//! - RAM and ROM ([`RamDevice`](crate::RamDevice), [`RomDevice`](crate::RomDevice))
//! - Memory-mapped I/O registers
//! - Another `Bus` (buses nest)
//!
//! ## Design Principles
//!
//! - No bus errors: an access outside a device's range is *declined*, not failed.
//!   Reads decline with `None`, writes with `false`.
//! - Read-only devices decline writes the same way.
//! - Reads take `&self`; writes take `&mut self` so side effects are explicit.

use std::cell::RefCell;
use std::rc::Rc;

/// A peripheral occupying an inclusive range of the 16-bit address space.
///
/// # Examples
///
/// ```
/// use rt6502::Addressable;
///
/// /// Single read-only register that always reads as 0x42.
/// struct Constant {
///     address: u16,
/// }
///
/// impl Addressable for Constant {
///     fn is_readable(&self) -> bool {
///         true
///     }
///
///     fn is_writable(&self) -> bool {
///         false
///     }
///
///     fn address_start(&self) -> u16 {
///         self.address
///     }
///
///     fn address_end(&self) -> u16 {
///         self.address
///     }
///
///     fn read(&self, address: u16) -> Option<u8> {
///         self.contains(address).then_some(0x42)
///     }
///
///     fn write(&mut self, _address: u16, _data: u8) -> bool {
///         false
///     }
/// }
///
/// let mut reg = Constant { address: 0xD000 };
/// assert_eq!(reg.read(0xD000), Some(0x42));
/// assert_eq!(reg.read(0xD001), None);
/// assert!(!reg.write(0xD000, 0x00));
/// ```
pub trait Addressable {
    /// Returns `true` if this device answers reads.
    fn is_readable(&self) -> bool;

    /// Returns `true` if this device accepts writes.
    fn is_writable(&self) -> bool;

    /// First address of the device's range.
    fn address_start(&self) -> u16;

    /// Last address of the device's range (inclusive).
    fn address_end(&self) -> u16;

    /// Reads the byte at `address`.
    ///
    /// Returns `None` if the device declines the access, for example because
    /// `address` lies outside its range. This is a normal negative result.
    fn read(&self, address: u16) -> Option<u8>;

    /// Writes `data` at `address`.
    ///
    /// Returns `false` if the device declines the access (outside its range,
    /// or the device is read-only).
    fn write(&mut self, address: u16, data: u8) -> bool;

    /// Returns `true` if `address` falls inside `[address_start, address_end]`.
    fn contains(&self, address: u16) -> bool {
        address >= self.address_start() && address <= self.address_end()
    }
}

impl<T: Addressable + ?Sized> Addressable for Box<T> {
    fn is_readable(&self) -> bool {
        (**self).is_readable()
    }

    fn is_writable(&self) -> bool {
        (**self).is_writable()
    }

    fn address_start(&self) -> u16 {
        (**self).address_start()
    }

    fn address_end(&self) -> u16 {
        (**self).address_end()
    }

    fn read(&self, address: u16) -> Option<u8> {
        (**self).read(address)
    }

    fn write(&mut self, address: u16, data: u8) -> bool {
        (**self).write(address, data)
    }
}

/// Shared custody: the host keeps one handle, the bus owns a clone.
///
/// # Examples
///
/// ```
/// use rt6502::{Addressable, Bus, RamDevice};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let ram = Rc::new(RefCell::new(RamDevice::new(0x0000, 0x00FF).unwrap()));
/// let mut bus = Bus::new();
/// bus.attach(Box::new(Rc::clone(&ram)));
///
/// bus.write(0x0010, 0xAB);
/// assert_eq!(ram.borrow().read(0x0010), Some(0xAB));
/// ```
impl<T: Addressable> Addressable for Rc<RefCell<T>> {
    fn is_readable(&self) -> bool {
        self.borrow().is_readable()
    }

    fn is_writable(&self) -> bool {
        self.borrow().is_writable()
    }

    fn address_start(&self) -> u16 {
        self.borrow().address_start()
    }

    fn address_end(&self) -> u16 {
        self.borrow().address_end()
    }

    fn read(&self, address: u16) -> Option<u8> {
        self.borrow().read(address)
    }

    fn write(&mut self, address: u16, data: u8) -> bool {
        self.borrow_mut().write(address, data)
    }
}
