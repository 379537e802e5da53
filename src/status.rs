//! # Processor Status Register
//!
//! The 6502 keeps its condition codes and mode bits in a single 8-bit register
//! laid out as `NV-BDIZC`:
//!
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: unused, always reads as 1
//! - Bit 4: B (Break), only meaningful in the copy pushed to the stack
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

/// Processor status register.
///
/// # Examples
///
/// ```
/// use rt6502::Status;
///
/// let mut status = Status::default();
/// assert!(status.contains(Status::UNUSED));
///
/// status.set_result(0x80);
/// assert!(status.contains(Status::NEGATIVE));
/// assert!(!status.contains(Status::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(u8);

impl Status {
    /// Carry: unsigned overflow out of bit 7, or "no borrow" after a subtract.
    pub const CARRY: u8 = 0b0000_0001;

    /// Zero: last result was zero.
    pub const ZERO: u8 = 0b0000_0010;

    /// Interrupt disable: maskable interrupts are ignored while set.
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;

    /// Decimal mode.
    pub const DECIMAL: u8 = 0b0000_1000;

    /// Break: set in the image pushed by BRK/PHP, clear in the image pushed by IRQ/NMI.
    pub const BREAK: u8 = 0b0001_0000;

    /// Unused: wired high.
    pub const UNUSED: u8 = 0b0010_0000;

    /// Overflow: signed (two's complement) overflow.
    pub const OVERFLOW: u8 = 0b0100_0000;

    /// Negative: bit 7 of the last result.
    pub const NEGATIVE: u8 = 0b1000_0000;

    /// Creates a status register from a raw byte, forcing the unused bit high.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits | Self::UNUSED)
    }

    /// Returns the raw register byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every bit of `flag` is set.
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// Sets or clears `flag`.
    pub fn set(&mut self, flag: u8, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    /// Updates Zero and Negative from an operation result.
    ///
    /// Zero is set iff `value == 0`; Negative is set iff bit 7 of `value` is set.
    pub fn set_result(&mut self, value: u8) {
        self.set(Self::ZERO, value == 0);
        self.set(Self::NEGATIVE, value & 0x80 != 0);
    }

    /// Image pushed by BRK and PHP: Break and Unused forced high.
    pub const fn pushed_by_software(self) -> u8 {
        self.0 | Self::BREAK | Self::UNUSED
    }

    /// Image pushed when servicing IRQ or NMI: Break forced low, Unused high.
    pub const fn pushed_by_hardware(self) -> u8 {
        (self.0 | Self::UNUSED) & !Self::BREAK
    }

    /// Register value restored by PLP and RTI from a stacked image.
    ///
    /// Break does not exist as a latch inside the processor, so it is dropped.
    pub const fn pulled(image: u8) -> Self {
        Self((image | Self::UNUSED) & !Self::BREAK)
    }
}

impl Default for Status {
    /// Power-on value: Unused and Interrupt Disable set.
    fn default() -> Self {
        Self(Self::UNUSED | Self::INTERRUPT_DISABLE)
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status.bits()
    }
}
