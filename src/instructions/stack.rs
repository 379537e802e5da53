//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::{Addressable, Cpu, Status};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.push(cpu.a);
    false
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has B and the unused bit set.
pub(crate) fn execute_php<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.push(cpu.status.pushed_by_software());
    false
}

/// Executes the PLA (Pull Accumulator) instruction.
pub(crate) fn execute_pla<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.a = cpu.pull();
    cpu.status.set_result(cpu.a);
    false
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// B is dropped and the unused bit forced high.
pub(crate) fn execute_plp<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    let image = cpu.pull();
    cpu.status = Status::pulled(image);
    false
}
