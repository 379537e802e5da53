//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::{Addressable, Cpu, Status};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.status.set(Status::CARRY, false);
    false
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.status.set(Status::CARRY, true);
    false
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
///
/// A pending IRQ is examined at the boundary right after CLI completes.
pub(crate) fn execute_cli<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.status.set(Status::INTERRUPT_DISABLE, false);
    false
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.status.set(Status::INTERRUPT_DISABLE, true);
    false
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching "set overflow" instruction.
pub(crate) fn execute_clv<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.status.set(Status::OVERFLOW, false);
    false
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.status.set(Status::DECIMAL, false);
    false
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.status.set(Status::DECIMAL, true);
    false
}
