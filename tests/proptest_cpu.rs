//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to check arithmetic, flag and timing invariants
//! across the whole input space instead of hand-picked values.

use rt6502::{Addressable, Cpu, Instruction, OperationTable, RamDevice, Status};
use proptest::prelude::*;

/// Helper function to create a CPU with `program` at 0x8000, past its reset sequence
fn setup_cpu(program: &[u8]) -> Cpu<RamDevice> {
    let mut ram = RamDevice::new(0x0000, 0xFFFF).unwrap();
    ram.load(0xFFFC, &[0x00, 0x80]).unwrap();
    ram.load(0x8000, program).unwrap();
    let mut cpu = Cpu::new(ram);
    cpu.step();
    cpu.set_sp(0xFF);
    cpu
}

/// Opcodes that run an instruction, i.e. everything but the jam opcodes
fn running_opcodes() -> Vec<u8> {
    OperationTable::new()
        .iter()
        .filter(|op| op.instruction != Instruction::Kil)
        .map(|op| op.opcode)
        .collect()
}

// ========== Load and Flag Properties ==========

proptest! {
    /// Property: LDA immediate loads the value and sets N and Z from it
    #[test]
    fn prop_lda_immediate_sets_nz(value in any::<u8>()) {
        let mut cpu = setup_cpu(&[0xA9, value]);

        prop_assert_eq!(cpu.step(), 2);
        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flag_z(), value == 0);
        prop_assert_eq!(cpu.flag_n(), value & 0x80 != 0);
    }

    /// Property: set_result touches only N and Z
    #[test]
    fn prop_set_result_preserves_other_flags(bits in any::<u8>(), value in any::<u8>()) {
        let mut status = Status::from_bits(bits);
        status.set_result(value);

        let untouched = !(Status::NEGATIVE | Status::ZERO);
        prop_assert_eq!(status.bits() & untouched, (bits | Status::UNUSED) & untouched);
        prop_assert_eq!(status.contains(Status::ZERO), value == 0);
        prop_assert_eq!(status.contains(Status::NEGATIVE), value & 0x80 != 0);
    }

    /// Property: RAM returns the last value written to any address
    #[test]
    fn prop_ram_round_trip(address in any::<u16>(), value in any::<u8>()) {
        let mut ram = RamDevice::new(0x0000, 0xFFFF).unwrap();

        prop_assert!(ram.write(address, value));
        prop_assert_eq!(ram.read(address), Some(value));
    }
}

// ========== Arithmetic Properties ==========

proptest! {
    /// Property: ADC matches wide addition for result, carry and overflow
    #[test]
    fn prop_adc_matches_wide_addition(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu(&[0x69, m]);
        cpu.set_a(a);
        cpu.set_status(if carry { Status::CARRY } else { 0 });

        cpu.step();

        let sum = u16::from(a) + u16::from(m) + u16::from(carry);
        let result = sum as u8;
        let overflow = (a ^ result) & (m ^ result) & 0x80 != 0;
        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(cpu.flag_c(), sum > 0xFF);
        prop_assert_eq!(cpu.flag_v(), overflow);
        prop_assert_eq!(cpu.flag_z(), result == 0);
        prop_assert_eq!(cpu.flag_n(), result & 0x80 != 0);
    }

    /// Property: SBC matches wide subtraction with carry as inverted borrow
    #[test]
    fn prop_sbc_matches_wide_subtraction(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu(&[0xE9, m]);
        cpu.set_a(a);
        cpu.set_status(if carry { Status::CARRY } else { 0 });

        cpu.step();

        let borrow = i16::from(!carry);
        let difference = i16::from(a) - i16::from(m) - borrow;
        let result = difference as u8;
        let overflow = (a ^ m) & (a ^ result) & 0x80 != 0;
        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(cpu.flag_c(), difference >= 0);
        prop_assert_eq!(cpu.flag_v(), overflow);
    }

    /// Property: CMP sets carry when A >= M and leaves A untouched
    #[test]
    fn prop_cmp_orders_operands(a in any::<u8>(), m in any::<u8>()) {
        let mut cpu = setup_cpu(&[0xC9, m]);
        cpu.set_a(a);

        cpu.step();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flag_c(), a >= m);
        prop_assert_eq!(cpu.flag_z(), a == m);
        prop_assert_eq!(cpu.flag_n(), a.wrapping_sub(m) & 0x80 != 0);
    }

    /// Property: ROL then ROR through carry restores the accumulator
    #[test]
    fn prop_rotate_round_trip(a in any::<u8>(), carry in any::<bool>()) {
        // ROL A, ROR A
        let mut cpu = setup_cpu(&[0x2A, 0x6A]);
        cpu.set_a(a);
        cpu.set_status(if carry { Status::CARRY } else { 0 });

        cpu.step();
        prop_assert_eq!(cpu.flag_c(), a & 0x80 != 0);
        cpu.step();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flag_c(), carry);
    }
}

// ========== Timing and Status Properties ==========

proptest! {
    /// Property: LDA abs,X costs one extra tick exactly when the index crosses a page
    #[test]
    fn prop_absolute_x_page_cross_penalty(base in 0x0200u16..0x7F00, x in any::<u8>()) {
        let [low, high] = base.to_le_bytes();
        let mut cpu = setup_cpu(&[0xBD, low, high]);
        cpu.set_x(x);

        let crossed = (base & 0xFF00) != (base.wrapping_add(u16::from(x)) & 0xFF00);
        prop_assert_eq!(cpu.step(), 4 + u8::from(crossed));
    }

    /// Property: STA abs,X never pays the page-cross penalty
    #[test]
    fn prop_store_has_fixed_cost(base in 0x0200u16..0x7F00, x in any::<u8>()) {
        let [low, high] = base.to_le_bytes();
        let mut cpu = setup_cpu(&[0x9D, low, high]);
        cpu.set_x(x);

        prop_assert_eq!(cpu.step(), 5);
    }

    /// Property: every running opcode completes within its base cost plus two,
    /// and Unused stays set afterwards
    #[test]
    fn prop_any_opcode_step_invariants(
        index in 0usize..243,
        operand in any::<[u8; 2]>(),
        status in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
    ) {
        let opcodes = running_opcodes();
        let opcode = opcodes[index % opcodes.len()];
        let base = OperationTable::new()[opcode].cycles;

        let mut cpu = setup_cpu(&[opcode, operand[0], operand[1]]);
        cpu.set_status(status);
        cpu.set_x(x);
        cpu.set_y(y);

        let ticks = cpu.step();

        prop_assert!(!cpu.is_halted());
        prop_assert!(ticks >= base && ticks <= base + 2, "opcode {:#04X}: {} ticks", opcode, ticks);
        prop_assert!(cpu.status().contains(Status::UNUSED));
        prop_assert!(cpu.is_operation_complete());
    }
}
