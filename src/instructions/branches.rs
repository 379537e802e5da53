//! # Branch Instructions
//!
//! This module implements the conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::{Addressable, Cpu, Operand};

/// Branches to the resolved target when `flag` is `expected`.
///
/// A taken branch costs one cycle here and asks for the page-crossing cycle,
/// which the addressing step grants only if the target is on another page.
pub(crate) fn branch_if<B: Addressable>(
    cpu: &mut Cpu<B>,
    operand: Operand,
    flag: u8,
    expected: bool,
) -> bool {
    if cpu.status.contains(flag) != expected {
        return false;
    }
    let Operand::Address(target) = operand else {
        return false;
    };

    cpu.cycles_remaining += 1;
    cpu.pc = target;
    true
}
