//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or on memory, depending on the operand.
//! The bit shifted out lands in Carry.

use crate::{Addressable, Cpu, Operand, Status};

fn shift<B: Addressable>(
    cpu: &mut Cpu<B>,
    operand: Operand,
    carry_out_mask: u8,
    op: impl FnOnce(u8, bool) -> u8,
) {
    let value = cpu.fetch(operand);
    let result = op(value, cpu.status.contains(Status::CARRY));
    cpu.status.set(Status::CARRY, value & carry_out_mask != 0);
    cpu.status.set_result(result);
    cpu.store(operand, result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    shift(cpu, operand, 0x80, |value, _| value << 1);
    false
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 of the result is always 0, so N is always cleared.
pub(crate) fn execute_lsr<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    shift(cpu, operand, 0x01, |value, _| value >> 1);
    false
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    shift(cpu, operand, 0x80, |value, carry| (value << 1) | u8::from(carry));
    false
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    shift(cpu, operand, 0x01, |value, carry| {
        (value >> 1) | (u8::from(carry) << 7)
    });
    false
}
