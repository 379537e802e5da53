//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic against the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! Arithmetic is binary. The Decimal flag is stored and pushed like any other
//! flag but does not change how ADC and SBC compute.

use crate::{Addressable, Cpu, Operand, Status};

/// Adds `value` and the carry flag to the accumulator, updating C, V, Z and N.
///
/// Overflow is set when both inputs share a sign that the result does not.
fn add_with_carry<B: Addressable>(cpu: &mut Cpu<B>, value: u8) {
    let carry_in = u16::from(cpu.status.contains(Status::CARRY));
    let sum = u16::from(cpu.a) + u16::from(value) + carry_in;
    let result = sum as u8;

    cpu.status.set(Status::CARRY, sum > 0xFF);
    cpu.status
        .set(Status::OVERFLOW, (cpu.a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.status.set_result(result);
    cpu.a = result;
}

/// Sets C when `register >= value`, and Z/N from the difference.
fn compare<B: Addressable>(cpu: &mut Cpu<B>, register: u8, value: u8) {
    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.set_result(register.wrapping_sub(value));
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A + M + C -> A. Flags affected: C, V, Z, N.
pub(crate) fn execute_adc<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    let value = cpu.fetch(operand);
    add_with_carry(cpu, value);
    true
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A - M - (1 - C) -> A, computed as an add of the complemented operand.
/// Carry clear afterwards means a borrow occurred.
pub(crate) fn execute_sbc<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    let value = cpu.fetch(operand);
    add_with_carry(cpu, !value);
    true
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    cpu.a &= cpu.fetch(operand);
    cpu.status.set_result(cpu.a);
    true
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    cpu.a |= cpu.fetch(operand);
    cpu.status.set_result(cpu.a);
    true
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    cpu.a ^= cpu.fetch(operand);
    cpu.status.set_result(cpu.a);
    true
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    let value = cpu.fetch(operand);
    let register = cpu.a;
    compare(cpu, register, value);
    true
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    let value = cpu.fetch(operand);
    let register = cpu.x;
    compare(cpu, register, value);
    false
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    let value = cpu.fetch(operand);
    let register = cpu.y;
    compare(cpu, register, value);
    false
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M. N and V are copied from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn execute_bit<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    let value = cpu.fetch(operand);
    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
    false
}
