//! Memory peripherals for the 6502 bus.
//!
//! Both devices answer on an inclusive address range fixed at construction and
//! decline any access outside it.
//!
//! - [`RamDevice`]: readable and writable storage
//! - [`RomDevice`]: read-only image; writes are declined
//!
//! # Example
//!
//! ```rust
//! use rt6502::{Bus, Cpu, RamDevice, RomDevice};
//!
//! let mut bus = Bus::new();
//!
//! // 32KB RAM at 0x0000-0x7FFF
//! bus.attach(Box::new(RamDevice::new(0x0000, 0x7FFF).unwrap()));
//!
//! // 16KB ROM at 0xC000-0xFFFF with the reset vector pointing at 0xC000
//! let mut image = vec![0xEA; 0x4000];
//! image[0x3FFC] = 0x00;
//! image[0x3FFD] = 0xC0;
//! bus.attach(Box::new(RomDevice::new(0xC000, image).unwrap()));
//!
//! let cpu = Cpu::new(bus);
//! assert_eq!(cpu.pc(), 0xC000);
//! ```

use thiserror::Error;

pub mod ram;
pub mod rom;

pub use ram::RamDevice;
pub use rom::RomDevice;

/// Construction-time failures for memory peripherals.
///
/// These are setup mistakes, surfaced before emulation starts. Once a device
/// exists, every access either succeeds or is declined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// The end address is not strictly greater than the start address.
    #[error("invalid device range ${start:04X}-${end:04X}: end must be greater than start")]
    InvalidRange {
        /// Requested first address
        start: u16,
        /// Requested last address
        end: u16,
    },

    /// A ROM image does not fit between its base address and 0xFFFF.
    #[error("image of {len} bytes does not fit at ${start:04X}")]
    ImageTooLarge {
        /// Requested base address
        start: u16,
        /// Image length in bytes
        len: usize,
    },

    /// A block load would write outside the device's range.
    #[error("cannot load {len} bytes at ${address:04X} into device ${start:04X}-${end:04X}")]
    LoadOutOfRange {
        /// Destination address of the load
        address: u16,
        /// Number of bytes to load
        len: usize,
        /// First address of the device
        start: u16,
        /// Last address of the device
        end: u16,
    },
}

/// Validates an inclusive range and returns its size in bytes.
pub(crate) fn range_len(start: u16, end: u16) -> Result<usize, DeviceError> {
    if end <= start {
        return Err(DeviceError::InvalidRange { start, end });
    }
    Ok(usize::from(end - start) + 1)
}
