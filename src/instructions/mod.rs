//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that takes a mutable reference to the CPU and,
//! where it needs one, the operand resolved by the addressing step.
//!
//! Every handler returns `true` when it wants the page-crossing cycle. The
//! cycle is only charged when the addressing step also crossed a page.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **illegal**: Undocumented opcodes and the jam opcode

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod illegal;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{Addressable, Cpu, Instruction, Operand, Status};

/// Runs `instruction` against `operand` and reports whether it wants the
/// page-crossing cycle.
pub(crate) fn execute<B: Addressable>(
    cpu: &mut Cpu<B>,
    instruction: Instruction,
    operand: Operand,
) -> bool {
    use Instruction::*;

    match instruction {
        Adc => alu::execute_adc(cpu, operand),
        And => alu::execute_and(cpu, operand),
        Bit => alu::execute_bit(cpu, operand),
        Cmp => alu::execute_cmp(cpu, operand),
        Cpx => alu::execute_cpx(cpu, operand),
        Cpy => alu::execute_cpy(cpu, operand),
        Eor => alu::execute_eor(cpu, operand),
        Ora => alu::execute_ora(cpu, operand),
        Sbc => alu::execute_sbc(cpu, operand),

        Bcc => branches::branch_if(cpu, operand, Status::CARRY, false),
        Bcs => branches::branch_if(cpu, operand, Status::CARRY, true),
        Beq => branches::branch_if(cpu, operand, Status::ZERO, true),
        Bne => branches::branch_if(cpu, operand, Status::ZERO, false),
        Bmi => branches::branch_if(cpu, operand, Status::NEGATIVE, true),
        Bpl => branches::branch_if(cpu, operand, Status::NEGATIVE, false),
        Bvc => branches::branch_if(cpu, operand, Status::OVERFLOW, false),
        Bvs => branches::branch_if(cpu, operand, Status::OVERFLOW, true),

        Brk => control::execute_brk(cpu),
        Jmp => control::execute_jmp(cpu, operand),
        Jsr => control::execute_jsr(cpu, operand),
        Nop => control::execute_nop(cpu),
        Rti => control::execute_rti(cpu),
        Rts => control::execute_rts(cpu),

        Clc => flags::execute_clc(cpu),
        Cld => flags::execute_cld(cpu),
        Cli => flags::execute_cli(cpu),
        Clv => flags::execute_clv(cpu),
        Sec => flags::execute_sec(cpu),
        Sed => flags::execute_sed(cpu),
        Sei => flags::execute_sei(cpu),

        Dec => inc_dec::execute_dec(cpu, operand),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),
        Inc => inc_dec::execute_inc(cpu, operand),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),

        Lda => load_store::execute_lda(cpu, operand),
        Ldx => load_store::execute_ldx(cpu, operand),
        Ldy => load_store::execute_ldy(cpu, operand),
        Sta => load_store::execute_sta(cpu, operand),
        Stx => load_store::execute_stx(cpu, operand),
        Sty => load_store::execute_sty(cpu, operand),

        Asl => shifts::execute_asl(cpu, operand),
        Lsr => shifts::execute_lsr(cpu, operand),
        Rol => shifts::execute_rol(cpu, operand),
        Ror => shifts::execute_ror(cpu, operand),

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txa => transfer::execute_txa(cpu),
        Txs => transfer::execute_txs(cpu),
        Tya => transfer::execute_tya(cpu),

        Kil => illegal::execute_kil(cpu),
        Slo | Rla | Sre | Rra | Sax | Lax | Dcp | Isc | Anc | Alr | Arr | Xaa | Axs | Ahx
        | Shy | Shx | Tas | Las => illegal::execute_unofficial(cpu, instruction),
    }
}
