//! # Operation Table
//!
//! This module contains the 256-entry operation table that maps every opcode
//! byte to its instruction, addressing mode and base cycle cost.
//!
//! The table covers:
//! - **151 documented opcodes** for the 56 official NMOS 6502 instructions
//! - **105 undocumented opcodes**, registered with their real addressing mode
//!   and cycle count. Unofficial NOP variants and the duplicate SBC (0xEB) run
//!   their documented twin; the rest run as stubs that change nothing, and the
//!   twelve jam opcodes halt the processor.
//!
//! The table is built by [`OperationTable::new`] when a [`Cpu`](crate::Cpu) is
//! constructed and is immutable afterwards.

use crate::AddressingMode;
use std::ops::Index;

/// Instruction semantics selected by an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // Documented instructions
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,

    // Undocumented instructions
    Kil,
    Slo,
    Rla,
    Sre,
    Rra,
    Sax,
    Lax,
    Dcp,
    Isc,
    Anc,
    Alr,
    Arr,
    Xaa,
    Axs,
    Ahx,
    Shy,
    Shx,
    Tas,
    Las,
}

impl Instruction {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        use Instruction::*;

        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Kil => "KIL",
            Slo => "SLO",
            Rla => "RLA",
            Sre => "SRE",
            Rra => "RRA",
            Sax => "SAX",
            Lax => "LAX",
            Dcp => "DCP",
            Isc => "ISC",
            Anc => "ANC",
            Alr => "ALR",
            Arr => "ARR",
            Xaa => "XAA",
            Axs => "AXS",
            Ahx => "AHX",
            Shy => "SHY",
            Shx => "SHX",
            Tas => "TAS",
            Las => "LAS",
        }
    }

    /// Returns true for the 56 instructions in the official programming manual.
    pub const fn is_documented(self) -> bool {
        use Instruction::*;

        !matches!(
            self,
            Kil | Slo
                | Rla
                | Sre
                | Rra
                | Sax
                | Lax
                | Dcp
                | Isc
                | Anc
                | Alr
                | Arr
                | Xaa
                | Axs
                | Ahx
                | Shy
                | Shx
                | Tas
                | Las
        )
    }
}

/// One entry of the operation table.
///
/// # Examples
///
/// ```
/// use rt6502::{AddressingMode, Instruction, OperationTable};
///
/// let table = OperationTable::new();
/// let lda_imm = table[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.cycles, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Opcode byte.
    pub opcode: u8,

    /// Assembler mnemonic, for diagnostics only.
    pub mnemonic: &'static str,

    /// Addressing mode resolved before the instruction runs.
    pub mode: AddressingMode,

    /// Instruction semantics.
    pub instruction: Instruction,

    /// Base cycle cost, before page-crossing and branch penalties.
    pub cycles: u8,
}

impl Operation {
    const fn new(opcode: u8, instruction: Instruction, mode: AddressingMode, cycles: u8) -> Self {
        Self {
            opcode,
            mnemonic: instruction.mnemonic(),
            mode,
            instruction,
            cycles,
        }
    }

    /// Instruction length in bytes, opcode included.
    pub const fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_len()
    }
}

/// Complete 256-entry operation table indexed by opcode byte.
#[derive(Debug, Clone)]
pub struct OperationTable {
    entries: Box<[Operation; 256]>,
}

impl OperationTable {
    /// Builds the table.
    pub fn new() -> Self {
        use AddressingMode::*;
        use Instruction::*;

        let mut entries = Box::new([Operation::new(0x02, Kil, Implied, 0); 256]);

        macro_rules! op {
            ($code:expr, $inst:ident, $mode:ident, $cycles:expr) => {
                entries[$code] = Operation::new($code, $inst, $mode, $cycles)
            };
        }

        op!(0x00, Brk, Implied, 7);
        op!(0x01, Ora, IndirectX, 6);
        op!(0x02, Kil, Implied, 0);
        op!(0x03, Slo, IndirectX, 8);
        op!(0x04, Nop, ZeroPage, 3);
        op!(0x05, Ora, ZeroPage, 3);
        op!(0x06, Asl, ZeroPage, 5);
        op!(0x07, Slo, ZeroPage, 5);
        op!(0x08, Php, Implied, 3);
        op!(0x09, Ora, Immediate, 2);
        op!(0x0A, Asl, Accumulator, 2);
        op!(0x0B, Anc, Immediate, 2);
        op!(0x0C, Nop, Absolute, 4);
        op!(0x0D, Ora, Absolute, 4);
        op!(0x0E, Asl, Absolute, 6);
        op!(0x0F, Slo, Absolute, 6);

        op!(0x10, Bpl, Relative, 2);
        op!(0x11, Ora, IndirectY, 5);
        op!(0x12, Kil, Implied, 0);
        op!(0x13, Slo, IndirectY, 8);
        op!(0x14, Nop, ZeroPageX, 4);
        op!(0x15, Ora, ZeroPageX, 4);
        op!(0x16, Asl, ZeroPageX, 6);
        op!(0x17, Slo, ZeroPageX, 6);
        op!(0x18, Clc, Implied, 2);
        op!(0x19, Ora, AbsoluteY, 4);
        op!(0x1A, Nop, Implied, 2);
        op!(0x1B, Slo, AbsoluteY, 7);
        op!(0x1C, Nop, AbsoluteX, 4);
        op!(0x1D, Ora, AbsoluteX, 4);
        op!(0x1E, Asl, AbsoluteX, 7);
        op!(0x1F, Slo, AbsoluteX, 7);

        op!(0x20, Jsr, Absolute, 6);
        op!(0x21, And, IndirectX, 6);
        op!(0x22, Kil, Implied, 0);
        op!(0x23, Rla, IndirectX, 8);
        op!(0x24, Bit, ZeroPage, 3);
        op!(0x25, And, ZeroPage, 3);
        op!(0x26, Rol, ZeroPage, 5);
        op!(0x27, Rla, ZeroPage, 5);
        op!(0x28, Plp, Implied, 4);
        op!(0x29, And, Immediate, 2);
        op!(0x2A, Rol, Accumulator, 2);
        op!(0x2B, Anc, Immediate, 2);
        op!(0x2C, Bit, Absolute, 4);
        op!(0x2D, And, Absolute, 4);
        op!(0x2E, Rol, Absolute, 6);
        op!(0x2F, Rla, Absolute, 6);

        op!(0x30, Bmi, Relative, 2);
        op!(0x31, And, IndirectY, 5);
        op!(0x32, Kil, Implied, 0);
        op!(0x33, Rla, IndirectY, 8);
        op!(0x34, Nop, ZeroPageX, 4);
        op!(0x35, And, ZeroPageX, 4);
        op!(0x36, Rol, ZeroPageX, 6);
        op!(0x37, Rla, ZeroPageX, 6);
        op!(0x38, Sec, Implied, 2);
        op!(0x39, And, AbsoluteY, 4);
        op!(0x3A, Nop, Implied, 2);
        op!(0x3B, Rla, AbsoluteY, 7);
        op!(0x3C, Nop, AbsoluteX, 4);
        op!(0x3D, And, AbsoluteX, 4);
        op!(0x3E, Rol, AbsoluteX, 7);
        op!(0x3F, Rla, AbsoluteX, 7);

        op!(0x40, Rti, Implied, 6);
        op!(0x41, Eor, IndirectX, 6);
        op!(0x42, Kil, Implied, 0);
        op!(0x43, Sre, IndirectX, 8);
        op!(0x44, Nop, ZeroPage, 3);
        op!(0x45, Eor, ZeroPage, 3);
        op!(0x46, Lsr, ZeroPage, 5);
        op!(0x47, Sre, ZeroPage, 5);
        op!(0x48, Pha, Implied, 3);
        op!(0x49, Eor, Immediate, 2);
        op!(0x4A, Lsr, Accumulator, 2);
        op!(0x4B, Alr, Immediate, 2);
        op!(0x4C, Jmp, Absolute, 3);
        op!(0x4D, Eor, Absolute, 4);
        op!(0x4E, Lsr, Absolute, 6);
        op!(0x4F, Sre, Absolute, 6);

        op!(0x50, Bvc, Relative, 2);
        op!(0x51, Eor, IndirectY, 5);
        op!(0x52, Kil, Implied, 0);
        op!(0x53, Sre, IndirectY, 8);
        op!(0x54, Nop, ZeroPageX, 4);
        op!(0x55, Eor, ZeroPageX, 4);
        op!(0x56, Lsr, ZeroPageX, 6);
        op!(0x57, Sre, ZeroPageX, 6);
        op!(0x58, Cli, Implied, 2);
        op!(0x59, Eor, AbsoluteY, 4);
        op!(0x5A, Nop, Implied, 2);
        op!(0x5B, Sre, AbsoluteY, 7);
        op!(0x5C, Nop, AbsoluteX, 4);
        op!(0x5D, Eor, AbsoluteX, 4);
        op!(0x5E, Lsr, AbsoluteX, 7);
        op!(0x5F, Sre, AbsoluteX, 7);

        op!(0x60, Rts, Implied, 6);
        op!(0x61, Adc, IndirectX, 6);
        op!(0x62, Kil, Implied, 0);
        op!(0x63, Rra, IndirectX, 8);
        op!(0x64, Nop, ZeroPage, 3);
        op!(0x65, Adc, ZeroPage, 3);
        op!(0x66, Ror, ZeroPage, 5);
        op!(0x67, Rra, ZeroPage, 5);
        op!(0x68, Pla, Implied, 4);
        op!(0x69, Adc, Immediate, 2);
        op!(0x6A, Ror, Accumulator, 2);
        op!(0x6B, Arr, Immediate, 2);
        op!(0x6C, Jmp, Indirect, 5);
        op!(0x6D, Adc, Absolute, 4);
        op!(0x6E, Ror, Absolute, 6);
        op!(0x6F, Rra, Absolute, 6);

        op!(0x70, Bvs, Relative, 2);
        op!(0x71, Adc, IndirectY, 5);
        op!(0x72, Kil, Implied, 0);
        op!(0x73, Rra, IndirectY, 8);
        op!(0x74, Nop, ZeroPageX, 4);
        op!(0x75, Adc, ZeroPageX, 4);
        op!(0x76, Ror, ZeroPageX, 6);
        op!(0x77, Rra, ZeroPageX, 6);
        op!(0x78, Sei, Implied, 2);
        op!(0x79, Adc, AbsoluteY, 4);
        op!(0x7A, Nop, Implied, 2);
        op!(0x7B, Rra, AbsoluteY, 7);
        op!(0x7C, Nop, AbsoluteX, 4);
        op!(0x7D, Adc, AbsoluteX, 4);
        op!(0x7E, Ror, AbsoluteX, 7);
        op!(0x7F, Rra, AbsoluteX, 7);

        op!(0x80, Nop, Immediate, 2);
        op!(0x81, Sta, IndirectX, 6);
        op!(0x82, Nop, Immediate, 2);
        op!(0x83, Sax, IndirectX, 6);
        op!(0x84, Sty, ZeroPage, 3);
        op!(0x85, Sta, ZeroPage, 3);
        op!(0x86, Stx, ZeroPage, 3);
        op!(0x87, Sax, ZeroPage, 3);
        op!(0x88, Dey, Implied, 2);
        op!(0x89, Nop, Immediate, 2);
        op!(0x8A, Txa, Implied, 2);
        op!(0x8B, Xaa, Immediate, 2);
        op!(0x8C, Sty, Absolute, 4);
        op!(0x8D, Sta, Absolute, 4);
        op!(0x8E, Stx, Absolute, 4);
        op!(0x8F, Sax, Absolute, 4);

        op!(0x90, Bcc, Relative, 2);
        op!(0x91, Sta, IndirectY, 6);
        op!(0x92, Kil, Implied, 0);
        op!(0x93, Ahx, IndirectY, 6);
        op!(0x94, Sty, ZeroPageX, 4);
        op!(0x95, Sta, ZeroPageX, 4);
        op!(0x96, Stx, ZeroPageY, 4);
        op!(0x97, Sax, ZeroPageY, 4);
        op!(0x98, Tya, Implied, 2);
        op!(0x99, Sta, AbsoluteY, 5);
        op!(0x9A, Txs, Implied, 2);
        op!(0x9B, Tas, AbsoluteY, 5);
        op!(0x9C, Shy, AbsoluteX, 5);
        op!(0x9D, Sta, AbsoluteX, 5);
        op!(0x9E, Shx, AbsoluteY, 5);
        op!(0x9F, Ahx, AbsoluteY, 5);

        op!(0xA0, Ldy, Immediate, 2);
        op!(0xA1, Lda, IndirectX, 6);
        op!(0xA2, Ldx, Immediate, 2);
        op!(0xA3, Lax, IndirectX, 6);
        op!(0xA4, Ldy, ZeroPage, 3);
        op!(0xA5, Lda, ZeroPage, 3);
        op!(0xA6, Ldx, ZeroPage, 3);
        op!(0xA7, Lax, ZeroPage, 3);
        op!(0xA8, Tay, Implied, 2);
        op!(0xA9, Lda, Immediate, 2);
        op!(0xAA, Tax, Implied, 2);
        op!(0xAB, Lax, Immediate, 2);
        op!(0xAC, Ldy, Absolute, 4);
        op!(0xAD, Lda, Absolute, 4);
        op!(0xAE, Ldx, Absolute, 4);
        op!(0xAF, Lax, Absolute, 4);

        op!(0xB0, Bcs, Relative, 2);
        op!(0xB1, Lda, IndirectY, 5);
        op!(0xB2, Kil, Implied, 0);
        op!(0xB3, Lax, IndirectY, 5);
        op!(0xB4, Ldy, ZeroPageX, 4);
        op!(0xB5, Lda, ZeroPageX, 4);
        op!(0xB6, Ldx, ZeroPageY, 4);
        op!(0xB7, Lax, ZeroPageY, 4);
        op!(0xB8, Clv, Implied, 2);
        op!(0xB9, Lda, AbsoluteY, 4);
        op!(0xBA, Tsx, Implied, 2);
        op!(0xBB, Las, AbsoluteY, 4);
        op!(0xBC, Ldy, AbsoluteX, 4);
        op!(0xBD, Lda, AbsoluteX, 4);
        op!(0xBE, Ldx, AbsoluteY, 4);
        op!(0xBF, Lax, AbsoluteY, 4);

        op!(0xC0, Cpy, Immediate, 2);
        op!(0xC1, Cmp, IndirectX, 6);
        op!(0xC2, Nop, Immediate, 2);
        op!(0xC3, Dcp, IndirectX, 8);
        op!(0xC4, Cpy, ZeroPage, 3);
        op!(0xC5, Cmp, ZeroPage, 3);
        op!(0xC6, Dec, ZeroPage, 5);
        op!(0xC7, Dcp, ZeroPage, 5);
        op!(0xC8, Iny, Implied, 2);
        op!(0xC9, Cmp, Immediate, 2);
        op!(0xCA, Dex, Implied, 2);
        op!(0xCB, Axs, Immediate, 2);
        op!(0xCC, Cpy, Absolute, 4);
        op!(0xCD, Cmp, Absolute, 4);
        op!(0xCE, Dec, Absolute, 6);
        op!(0xCF, Dcp, Absolute, 6);

        op!(0xD0, Bne, Relative, 2);
        op!(0xD1, Cmp, IndirectY, 5);
        op!(0xD2, Kil, Implied, 0);
        op!(0xD3, Dcp, IndirectY, 8);
        op!(0xD4, Nop, ZeroPageX, 4);
        op!(0xD5, Cmp, ZeroPageX, 4);
        op!(0xD6, Dec, ZeroPageX, 6);
        op!(0xD7, Dcp, ZeroPageX, 6);
        op!(0xD8, Cld, Implied, 2);
        op!(0xD9, Cmp, AbsoluteY, 4);
        op!(0xDA, Nop, Implied, 2);
        op!(0xDB, Dcp, AbsoluteY, 7);
        op!(0xDC, Nop, AbsoluteX, 4);
        op!(0xDD, Cmp, AbsoluteX, 4);
        op!(0xDE, Dec, AbsoluteX, 7);
        op!(0xDF, Dcp, AbsoluteX, 7);

        op!(0xE0, Cpx, Immediate, 2);
        op!(0xE1, Sbc, IndirectX, 6);
        op!(0xE2, Nop, Immediate, 2);
        op!(0xE3, Isc, IndirectX, 8);
        op!(0xE4, Cpx, ZeroPage, 3);
        op!(0xE5, Sbc, ZeroPage, 3);
        op!(0xE6, Inc, ZeroPage, 5);
        op!(0xE7, Isc, ZeroPage, 5);
        op!(0xE8, Inx, Implied, 2);
        op!(0xE9, Sbc, Immediate, 2);
        op!(0xEA, Nop, Implied, 2);
        op!(0xEB, Sbc, Immediate, 2);
        op!(0xEC, Cpx, Absolute, 4);
        op!(0xED, Sbc, Absolute, 4);
        op!(0xEE, Inc, Absolute, 6);
        op!(0xEF, Isc, Absolute, 6);

        op!(0xF0, Beq, Relative, 2);
        op!(0xF1, Sbc, IndirectY, 5);
        op!(0xF2, Kil, Implied, 0);
        op!(0xF3, Isc, IndirectY, 8);
        op!(0xF4, Nop, ZeroPageX, 4);
        op!(0xF5, Sbc, ZeroPageX, 4);
        op!(0xF6, Inc, ZeroPageX, 6);
        op!(0xF7, Isc, ZeroPageX, 6);
        op!(0xF8, Sed, Implied, 2);
        op!(0xF9, Sbc, AbsoluteY, 4);
        op!(0xFA, Nop, Implied, 2);
        op!(0xFB, Isc, AbsoluteY, 7);
        op!(0xFC, Nop, AbsoluteX, 4);
        op!(0xFD, Sbc, AbsoluteX, 4);
        op!(0xFE, Inc, AbsoluteX, 7);
        op!(0xFF, Isc, AbsoluteX, 7);

        Self { entries }
    }

    /// Returns the entry for `opcode`.
    pub fn get(&self, opcode: u8) -> &Operation {
        &self.entries[usize::from(opcode)]
    }

    /// Iterates over all 256 entries in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.entries.iter()
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u8> for OperationTable {
    type Output = Operation;

    fn index(&self, opcode: u8) -> &Operation {
        self.get(opcode)
    }
}
