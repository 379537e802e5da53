//! Tests for the BRK (Force Interrupt) and RTI instructions.
//!
//! Tests cover:
//! - Push order: return high byte, return low byte, status
//! - Return address skips the padding byte after BRK
//! - B set in the pushed status only
//! - I flag set and IRQ vector loaded
//! - 7-cycle cost
//! - RTI returning past the padding byte

use rt6502::{Addressable, Bus, Cpu, RamDevice, Status};

/// Helper function to create a CPU with `program` at 0x8000 and an RTI at the IRQ handler
fn setup_cpu(program: &[u8]) -> Cpu<Bus> {
    let mut ram = RamDevice::new(0x0000, 0xFFFF).unwrap();
    ram.load(0xFFFC, &[0x00, 0x80]).unwrap();
    ram.load(0xFFFE, &[0x00, 0x90]).unwrap();
    ram.load(0x9000, &[0x40]).unwrap(); // RTI
    ram.load(0x8000, program).unwrap();
    let mut bus = Bus::new();
    bus.attach(Box::new(ram));
    let mut cpu = Cpu::new(bus);
    cpu.step();
    cpu.set_sp(0xFF);
    cpu
}

fn stack(cpu: &Cpu<Bus>, address: u16) -> u8 {
    cpu.bus().read(address).unwrap()
}

// ========== Basic BRK Operation Tests ==========

#[test]
fn test_brk_basic_operation() {
    let mut cpu = setup_cpu(&[0x00, 0xFF]);

    assert_eq!(cpu.step(), 7);

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFC);
    assert!(cpu.flag_i());
}

#[test]
fn test_brk_push_order() {
    let mut cpu = setup_cpu(&[0x00, 0xFF]);
    cpu.set_status(Status::CARRY | Status::NEGATIVE);

    cpu.step();

    // Return address is BRK + 2
    assert_eq!(stack(&cpu, 0x01FF), 0x80);
    assert_eq!(stack(&cpu, 0x01FE), 0x02);
    assert_eq!(
        stack(&cpu, 0x01FD),
        Status::CARRY | Status::NEGATIVE | Status::BREAK | Status::UNUSED
    );
}

#[test]
fn test_brk_break_flag_only_on_stack() {
    let mut cpu = setup_cpu(&[0x00, 0xFF]);

    cpu.step();
    assert!(!cpu.flag_b());
    assert!(!cpu.status().contains(Status::BREAK));
}

#[test]
fn test_brk_from_page_end() {
    let mut ram = RamDevice::new(0x0000, 0xFFFF).unwrap();
    ram.load(0xFFFC, &[0xFE, 0x80]).unwrap();
    ram.load(0xFFFE, &[0x00, 0x90]).unwrap();
    ram.load(0x80FE, &[0x00]).unwrap();
    let mut cpu = Cpu::new(ram);
    cpu.step();
    cpu.set_sp(0xFF);

    cpu.step();

    // 0x80FE + 2 = 0x8100
    assert_eq!(cpu.bus().read(0x01FF), Some(0x81));
    assert_eq!(cpu.bus().read(0x01FE), Some(0x00));
}

// ========== Return ==========

#[test]
fn test_rti_resumes_after_padding() {
    // BRK, padding, INX
    let mut cpu = setup_cpu(&[0x00, 0xFF, 0xE8]);
    cpu.set_status(Status::CARRY);

    cpu.step();
    assert_eq!(cpu.step(), 6);

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFF);
    // Status restored as it was before BRK, with B dropped
    assert_eq!(cpu.status().bits(), Status::CARRY | Status::UNUSED);

    cpu.step();
    assert_eq!(cpu.x(), 1);
}

#[test]
fn test_php_plp_round_trip() {
    // PHP, PLP
    let mut cpu = setup_cpu(&[0x08, 0x28]);
    cpu.set_status(Status::OVERFLOW | Status::ZERO);

    assert_eq!(cpu.step(), 3);
    assert_eq!(
        stack(&cpu, 0x01FF),
        Status::OVERFLOW | Status::ZERO | Status::BREAK | Status::UNUSED
    );

    assert_eq!(cpu.step(), 4);
    assert_eq!(
        cpu.status().bits(),
        Status::OVERFLOW | Status::ZERO | Status::UNUSED
    );
}
