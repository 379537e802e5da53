//! RAM device implementation.
//!
//! Provides readable and writable storage over a fixed address range.

use super::{range_len, DeviceError};
use crate::Addressable;

/// Readable and writable memory mapped at `[start, end]`.
///
/// # Examples
///
/// ```rust
/// use rt6502::{Addressable, RamDevice};
///
/// let mut ram = RamDevice::new(0x0200, 0x02FF).unwrap();
///
/// assert!(ram.write(0x0242, 0xAA));
/// assert_eq!(ram.read(0x0242), Some(0xAA));
///
/// // Outside the range the device declines
/// assert_eq!(ram.read(0x0300), None);
/// assert!(!ram.write(0x01FF, 0xAA));
/// ```
#[derive(Debug, Clone)]
pub struct RamDevice {
    start: u16,
    end: u16,
    data: Vec<u8>,
}

impl RamDevice {
    /// Creates a zero-filled RAM device covering `start..=end`.
    ///
    /// # Errors
    ///
    /// [`DeviceError::InvalidRange`] if `end <= start`.
    pub fn new(start: u16, end: u16) -> Result<Self, DeviceError> {
        let len = range_len(start, end)?;
        Ok(Self {
            start,
            end,
            data: vec![0; len],
        })
    }

    /// Copies `bytes` into the device starting at absolute `address`.
    ///
    /// This is useful for placing a program image before the CPU is reset.
    ///
    /// # Errors
    ///
    /// [`DeviceError::LoadOutOfRange`] if any byte would land outside the device.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rt6502::{Addressable, RamDevice};
    ///
    /// let mut ram = RamDevice::new(0x0000, 0x0FFF).unwrap();
    /// ram.load(0x0600, &[0xA9, 0x42, 0x85, 0x10]).unwrap(); // LDA #$42, STA $10
    ///
    /// assert_eq!(ram.read(0x0600), Some(0xA9));
    /// assert_eq!(ram.read(0x0603), Some(0x10));
    /// assert!(ram.load(0x0FFF, &[0x00, 0x00]).is_err());
    /// ```
    pub fn load(&mut self, address: u16, bytes: &[u8]) -> Result<(), DeviceError> {
        let out_of_range = DeviceError::LoadOutOfRange {
            address,
            len: bytes.len(),
            start: self.start,
            end: self.end,
        };
        if !self.contains(address) {
            return Err(out_of_range);
        }

        let offset = usize::from(address - self.start);
        let Some(window) = self.data.get_mut(offset..offset + bytes.len()) else {
            return Err(out_of_range);
        };
        window.copy_from_slice(bytes);
        Ok(())
    }

    fn offset(&self, address: u16) -> Option<usize> {
        self.contains(address)
            .then(|| usize::from(address - self.start))
    }
}

impl Addressable for RamDevice {
    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        true
    }

    fn address_start(&self) -> u16 {
        self.start
    }

    fn address_end(&self) -> u16 {
        self.end
    }

    fn read(&self, address: u16) -> Option<u8> {
        self.offset(address).map(|offset| self.data[offset])
    }

    fn write(&mut self, address: u16, data: u8) -> bool {
        match self.offset(address) {
            Some(offset) => {
                self.data[offset] = data;
                true
            }
            None => false,
        }
    }
}
