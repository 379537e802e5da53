//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX, TAY: Transfer accumulator to an index register
//! - TXA, TYA: Transfer an index register to the accumulator
//! - TSX: Transfer stack pointer to X
//! - TXS: Transfer X to stack pointer
//!
//! All set Z and N from the copied value except TXS, which affects no flags.

use crate::{Addressable, Cpu};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.x = cpu.a;
    cpu.status.set_result(cpu.x);
    false
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.y = cpu.a;
    cpu.status.set_result(cpu.y);
    false
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.x = cpu.sp;
    cpu.status.set_result(cpu.x);
    false
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.a = cpu.x;
    cpu.status.set_result(cpu.a);
    false
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
pub(crate) fn execute_txs<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.sp = cpu.x;
    false
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.a = cpu.y;
    cpu.status.set_result(cpu.a);
    false
}
