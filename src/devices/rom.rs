//! ROM device implementation.
//!
//! Provides read-only storage over a fixed address range.

use super::{range_len, DeviceError};
use crate::Addressable;

/// Read-only memory device.
///
/// The image is placed at `start` and occupies `start..=start + len - 1`.
/// The device reports itself as non-writable and declines every write.
///
/// # Examples
///
/// ```rust
/// use rt6502::{Addressable, RomDevice};
///
/// let mut rom = RomDevice::new(0xF000, vec![0xEA, 0xEA, 0xEA, 0xEA]).unwrap();
///
/// assert_eq!(rom.read(0xF000), Some(0xEA));
/// assert_eq!(rom.address_end(), 0xF003);
///
/// // Writes are declined
/// assert!(!rom.write(0xF000, 0xFF));
/// assert_eq!(rom.read(0xF000), Some(0xEA));
/// ```
#[derive(Debug, Clone)]
pub struct RomDevice {
    start: u16,
    end: u16,
    data: Vec<u8>,
}

impl RomDevice {
    /// Creates a ROM holding `image` at `start`.
    ///
    /// # Errors
    ///
    /// - [`DeviceError::ImageTooLarge`] if the image runs past 0xFFFF.
    /// - [`DeviceError::InvalidRange`] if the image is shorter than two bytes.
    pub fn new(start: u16, image: Vec<u8>) -> Result<Self, DeviceError> {
        let last = usize::from(start) + image.len().saturating_sub(1);
        let end = u16::try_from(last).map_err(|_| DeviceError::ImageTooLarge {
            start,
            len: image.len(),
        })?;
        range_len(start, end)?;

        Ok(Self {
            start,
            end,
            data: image,
        })
    }
}

impl Addressable for RomDevice {
    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        false
    }

    fn address_start(&self) -> u16 {
        self.start
    }

    fn address_end(&self) -> u16 {
        self.end
    }

    fn read(&self, address: u16) -> Option<u8> {
        if !self.contains(address) {
            return None;
        }
        self.data.get(usize::from(address - self.start)).copied()
    }

    fn write(&mut self, _address: u16, _data: u8) -> bool {
        false
    }
}
