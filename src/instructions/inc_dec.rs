//! # Increment and Decrement Instructions
//!
//! - INC, DEC: Read-modify-write on memory
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap modulo 256 and update Z and N. Carry is untouched.

use crate::{Addressable, Cpu, Operand};

fn modify<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand, delta: fn(u8) -> u8) {
    let result = delta(cpu.fetch(operand));
    cpu.store(operand, result);
    cpu.status.set_result(result);
}

fn increment(value: u8) -> u8 {
    value.wrapping_add(1)
}

fn decrement(value: u8) -> u8 {
    value.wrapping_sub(1)
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    modify(cpu, operand, increment);
    false
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<B: Addressable>(cpu: &mut Cpu<B>, operand: Operand) -> bool {
    modify(cpu, operand, decrement);
    false
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.x = increment(cpu.x);
    cpu.status.set_result(cpu.x);
    false
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.y = increment(cpu.y);
    cpu.status.set_result(cpu.y);
    false
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.x = decrement(cpu.x);
    cpu.status.set_result(cpu.x);
    false
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    cpu.y = decrement(cpu.y);
    cpu.status.set_result(cpu.y);
    false
}
