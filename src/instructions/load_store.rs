//! # Load and Store Instructions
//!
//! This module implements the register load and store operations:
//! - LDA, LDX, LDY: Load a register from memory, updating Z and N
//! - STA, STX, STY: Store a register to memory, no flags affected
//!
//! Loads pay the page-crossing cycle on indexed modes; stores always take
//! their fixed cost, which already includes the indexed fix-up cycle.

use crate::{Addressable, Cpu, Operand};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Flags affected:
/// - Z: Set if loaded value is 0
/// - N: Set if bit 7 of loaded value is set
pub(crate) fn execute_lda<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    cpu.a = cpu.fetch(operand);
    cpu.status.set_result(cpu.a);
    true
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    cpu.x = cpu.fetch(operand);
    cpu.status.set_result(cpu.x);
    true
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    cpu.y = cpu.fetch(operand);
    cpu.status.set_result(cpu.y);
    true
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    cpu.store(operand, cpu.a);
    false
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    cpu.store(operand, cpu.x);
    false
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    cpu.store(operand, cpu.y);
    false
}
