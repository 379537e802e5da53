//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! BRK is a software interrupt that:
//! 1. Skips the padding byte after its opcode
//! 2. Pushes PC to the stack (high byte first, then low byte)
//! 3. Pushes processor status to the stack with B set
//! 4. Sets the I (interrupt disable) flag
//! 5. Loads PC from the IRQ vector at $FFFE/F

use crate::cpu::IRQ_VECTOR;
use crate::{Addressable, Cpu, Operand, Status};

/// Executes the BRK (Force Interrupt) instruction.
///
/// The pushed return address is the opcode address + 2, so RTI resumes after
/// the padding byte.
///
/// Cycle timing: 7 cycles (fixed)
pub(crate) fn execute_brk<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_word(cpu.pc);
    let image = cpu.status.pushed_by_software();
    cpu.push(image);
    cpu.status.set(Status::INTERRUPT_DISABLE, true);
    cpu.pc = cpu.read_word(IRQ_VECTOR);
    false
}

/// Executes the JMP (Jump) instruction.
///
/// Both forms arrive here as a resolved address; the indirect page-wrap
/// defect is reproduced by the addressing step.
///
/// Cycle timing:
/// - Absolute: 3 cycles
/// - Indirect: 5 cycles
pub(crate) fn execute_jmp<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    if let Operand::Address(target) = operand {
        cpu.pc = target;
    }
    false
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last operand byte (return address - 1), then
/// jumps to the target.
pub(crate) fn execute_jsr<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    let Operand::Address(target) = operand else {
        return false;
    };
    cpu.push_word(cpu.pc.wrapping_sub(1));
    cpu.pc = target;
    false
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    false
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status (B cleared, Unused set) and then the program counter.
/// Unlike RTS, the pulled address is used as is.
pub(crate) fn execute_rti<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    let image = cpu.pull();
    cpu.status = Status::pulled(image);
    cpu.pc = cpu.pull_word();
    false
}

/// Executes the NOP (No Operation) instruction.
///
/// Also used by the unofficial NOP variants, which consume their operand
/// bytes through the addressing step.
pub(crate) fn execute_nop<B: Addressable>(_cpu: &mut Cpu<B>) -> bool {
    false
}
