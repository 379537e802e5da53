//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns a mode plus its operand bytes into an
//! [`Operand`] for the instruction step.
//!
//! Resolution happens once per dispatch. Its result, a [`Resolved`] value, is
//! passed by value to the instruction handler instead of being left behind in
//! processor fields.

use crate::{Addressable, Cpu};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset from the address of the next instruction.
    ///
    /// Example: BEQ label
    /// Crossing a page when the branch is taken costs one more cycle.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    ///
    /// NMOS parts never carry into the pointer's high byte: JMP ($10FF)
    /// reads its target from $10FF and $1000, not $1100.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Where an instruction reads its operand from and writes its result to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No memory operand.
    Implied,
    /// The accumulator register.
    Accumulator,
    /// An effective address on the bus.
    Address(u16),
}

/// Output of the addressing step for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Operand location.
    pub operand: Operand,
    /// Address computation crossed a 256-byte page.
    pub page_crossed: bool,
}

impl Resolved {
    const fn at(address: u16) -> Self {
        Self {
            operand: Operand::Address(address),
            page_crossed: false,
        }
    }

    const fn indexed(base: u16, effective: u16) -> Self {
        Self {
            operand: Operand::Address(effective),
            page_crossed: base & 0xFF00 != effective & 0xFF00,
        }
    }
}

impl<B: Addressable> Cpu<B> {
    /// Consumes the operand bytes for `mode` and computes the effective operand.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Resolved {
        match mode {
            AddressingMode::Implied => Resolved {
                operand: Operand::Implied,
                page_crossed: false,
            },
            AddressingMode::Accumulator => Resolved {
                operand: Operand::Accumulator,
                page_crossed: false,
            },
            AddressingMode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Resolved::at(address)
            }
            AddressingMode::ZeroPage => Resolved::at(u16::from(self.read_next_byte())),
            AddressingMode::ZeroPageX => {
                Resolved::at(u16::from(self.read_next_byte().wrapping_add(self.x)))
            }
            AddressingMode::ZeroPageY => {
                Resolved::at(u16::from(self.read_next_byte().wrapping_add(self.y)))
            }
            AddressingMode::Relative => {
                // Offset is two's complement, relative to the next instruction
                let offset = self.read_next_byte() as i8;
                let target = self.pc.wrapping_add_signed(i16::from(offset));
                Resolved::indexed(self.pc, target)
            }
            AddressingMode::Absolute => Resolved::at(self.read_next_word()),
            AddressingMode::AbsoluteX => {
                let base = self.read_next_word();
                Resolved::indexed(base, base.wrapping_add(u16::from(self.x)))
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_next_word();
                Resolved::indexed(base, base.wrapping_add(u16::from(self.y)))
            }
            AddressingMode::Indirect => {
                let pointer = self.read_next_word();
                let low = self.read(pointer);
                // Page-wrap defect: the high byte comes from the start of the same page
                let high_address = if pointer & 0x00FF == 0x00FF {
                    pointer & 0xFF00
                } else {
                    pointer.wrapping_add(1)
                };
                let high = self.read(high_address);
                Resolved::at(u16::from_le_bytes([low, high]))
            }
            AddressingMode::IndirectX => {
                let pointer = self.read_next_byte().wrapping_add(self.x);
                Resolved::at(self.read_zero_page_word(pointer))
            }
            AddressingMode::IndirectY => {
                let pointer = self.read_next_byte();
                let base = self.read_zero_page_word(pointer);
                Resolved::indexed(base, base.wrapping_add(u16::from(self.y)))
            }
        }
    }

    /// Reads a little-endian pointer from zero page, wrapping $FF to $00.
    fn read_zero_page_word(&mut self, pointer: u8) -> u16 {
        let low = self.read(u16::from(pointer));
        let high = self.read(u16::from(pointer.wrapping_add(1)));
        u16::from_le_bytes([low, high])
    }
}
