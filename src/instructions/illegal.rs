//! # Undocumented Instructions
//!
//! The undocumented opcodes are decoded with their real addressing mode and
//! cycle cost, so operand bytes are consumed and timing stays right, but
//! they leave registers, flags and memory untouched.
//!
//! The twelve jam opcodes (KIL) stop the processor until the next reset.

use crate::{Addressable, Cpu, Instruction};
use log::{trace, warn};

/// Executes KIL, halting the processor.
pub(crate) fn execute_kil<B: Addressable>(cpu: &mut Cpu<B>) -> bool {
    warn!(
        "KIL at ${:04X}: processor halted until reset",
        cpu.pc.wrapping_sub(1)
    );
    cpu.halted = true;
    false
}

/// Runs an undocumented instruction as a pass-through.
pub(crate) fn execute_unofficial<B: Addressable>(cpu: &mut Cpu<B>, instruction: Instruction) -> bool {
    trace!(
        "undocumented {} at ${:04X} has no effect",
        instruction.mnemonic(),
        cpu.pc
    );
    false
}
