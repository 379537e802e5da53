//! Tests for instruction execution through the tick loop.
//!
//! Tests cover:
//! - Arithmetic flag results for ADC, SBC and compares
//! - Accumulator-mode shifts
//! - Cycle counts, including page-crossing penalties
//! - Small complete programs

use rt6502::{Addressable, Bus, Cpu, RamDevice};

/// Helper function to create a CPU with `program` at 0x8000, past its reset sequence
fn setup_cpu(program: &[u8]) -> Cpu<Bus> {
    let mut ram = RamDevice::new(0x0000, 0xFFFF).unwrap();
    ram.load(0xFFFC, &[0x00, 0x80]).unwrap();
    ram.load(0x8000, program).unwrap();
    let mut bus = Bus::new();
    bus.attach(Box::new(ram));
    let mut cpu = Cpu::new(bus);
    cpu.step();
    cpu.set_sp(0xFF);
    cpu
}

/// Steps until the processor halts, with an upper bound to catch runaways
fn run_until_halt(cpu: &mut Cpu<Bus>) {
    for _ in 0..10_000 {
        if cpu.is_halted() {
            return;
        }
        cpu.step();
    }
    panic!("program did not halt");
}

// ========== Arithmetic ==========

#[test]
fn test_adc_signed_overflow() {
    // LDA #$50, ADC #$50
    let mut cpu = setup_cpu(&[0xA9, 0x50, 0x69, 0x50]);
    cpu.step();
    assert_eq!(cpu.step(), 2);

    assert_eq!(cpu.a(), 0xA0);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_sbc_with_borrow_chain() {
    // 16-bit 0x0100 - 0x0001: SEC, LDA #$00, SBC #$01, TAX, LDA #$01, SBC #$00
    let mut cpu = setup_cpu(&[0x38, 0xA9, 0x00, 0xE9, 0x01, 0xAA, 0xA9, 0x01, 0xE9, 0x00]);
    for _ in 0..6 {
        cpu.step();
    }

    assert_eq!(cpu.x(), 0xFF);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_duplicate_sbc_opcode() {
    // SEC, LDA #$10, SBC #$01 via 0xEB
    let mut cpu = setup_cpu(&[0x38, 0xA9, 0x10, 0xEB, 0x01]);
    for _ in 0..3 {
        cpu.step();
    }
    assert_eq!(cpu.a(), 0x0F);
}

#[test]
fn test_compare_carry() {
    // LDA #$10, CMP #$20, CPX #$00, CPY #$01
    let mut cpu = setup_cpu(&[0xA9, 0x10, 0xC9, 0x20, 0xE0, 0x00, 0xC0, 0x01]);
    cpu.step();

    cpu.step();
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());

    cpu.step();
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());

    cpu.step();
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_accumulator_shifts_take_one_byte() {
    // LDA #$81, ASL A, ROR A, LSR A, ROL A
    let mut cpu = setup_cpu(&[0xA9, 0x81, 0x0A, 0x6A, 0x4A, 0x2A]);
    cpu.step();

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert_eq!(cpu.pc(), 0x8003);

    cpu.step();
    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());

    cpu.step();
    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_c());

    cpu.step();
    assert_eq!(cpu.a(), 0x81);
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn test_read_modify_write_memory() {
    // INC $10, ASL $10, DEC $10
    let mut cpu = setup_cpu(&[0xE6, 0x10, 0x06, 0x10, 0xC6, 0x10]);
    cpu.bus_mut().write(0x0010, 0x7F);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.bus().read(0x0010), Some(0x80));
    assert!(cpu.flag_n());

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.bus().read(0x0010), Some(0x00));
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.bus().read(0x0010), Some(0xFF));
}

// ========== Timing ==========

#[test]
fn test_load_pays_page_cross() {
    // LDX #$10, LDA $12F0,X, LDA $1200,X
    let mut cpu = setup_cpu(&[0xA2, 0x10, 0xBD, 0xF0, 0x12, 0xBD, 0x00, 0x12]);
    cpu.step();

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.step(), 4);
}

#[test]
fn test_store_never_pays_page_cross() {
    // LDX #$10, STA $12F0,X
    let mut cpu = setup_cpu(&[0xA2, 0x10, 0x9D, 0xF0, 0x12]);
    cpu.step();

    assert_eq!(cpu.step(), 5);
}

#[test]
fn test_indirect_y_page_cross() {
    // LDY #$01, LDA ($40),Y
    let mut cpu = setup_cpu(&[0xA0, 0x01, 0xB1, 0x40]);
    cpu.bus_mut().write(0x0040, 0xFF);
    cpu.bus_mut().write(0x0041, 0x20);
    cpu.bus_mut().write(0x2100, 0x99);
    cpu.step();

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_read_modify_write_fixed_cost() {
    // LDX #$10, INC $12F0,X
    let mut cpu = setup_cpu(&[0xA2, 0x10, 0xFE, 0xF0, 0x12]);
    cpu.step();

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.bus().read(0x1300), Some(0x01));
}

#[test]
fn test_unofficial_nop_consumes_operand() {
    // NOP $12F0,X (unofficial), LDA #$01
    let mut cpu = setup_cpu(&[0x1C, 0xF0, 0x12, 0xA9, 0x01]);
    cpu.set_x(0x10);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.pc(), 0x8003);
    cpu.step();
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_undocumented_opcode_is_pass_through() {
    // LAX #$55 leaves A and X alone, then LDA #$01
    let mut cpu = setup_cpu(&[0xAB, 0x55, 0xA9, 0x01]);
    cpu.set_a(0x11);
    cpu.set_x(0x22);
    let status = cpu.status();

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.x(), 0x22);
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_undocumented_read_modify_write_leaves_memory() {
    let program = [
        0x07, 0x10, // SLO $10
        0xDF, 0x34, 0x12, // DCP $1234,X
        0xF3, 0x20, // ISC ($20),Y
        0x6F, 0x00, 0x13, // RRA $1300
    ];
    let mut cpu = setup_cpu(&program);
    cpu.set_a(0x11);
    cpu.set_x(0xF0);
    cpu.set_y(0xFF);
    let status = cpu.status();

    let bus = cpu.bus_mut();
    bus.write(0x0010, 0x81);
    bus.write(0x1324, 0x00);
    bus.write(0x0020, 0xF0);
    bus.write(0x0021, 0x12);
    bus.write(0x13EF, 0x7F);
    bus.write(0x1300, 0x01);

    // Full base cost, with no page-crossing penalty on the indexed forms
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.step(), 8);
    assert_eq!(cpu.step(), 6);

    assert_eq!(cpu.pc(), 0x800A);
    assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0x11, 0xF0, 0xFF));
    assert_eq!(cpu.status(), status);

    let bus = cpu.bus();
    assert_eq!(bus.read(0x0010), Some(0x81));
    assert_eq!(bus.read(0x1324), Some(0x00));
    assert_eq!(bus.read(0x13EF), Some(0x7F));
    assert_eq!(bus.read(0x1300), Some(0x01));
}

// ========== Programs ==========

#[test]
fn test_multiply_by_repeated_addition() {
    let program = [
        0xA2, 0x05, // LDX #$05
        0xA9, 0x00, // LDA #$00
        0x18, // loop: CLC
        0x69, 0x03, // ADC #$03
        0xCA, // DEX
        0xD0, 0xFA, // BNE loop
        0x8D, 0x00, 0x02, // STA $0200
        0x02, // KIL
    ];
    let mut cpu = setup_cpu(&program);

    run_until_halt(&mut cpu);

    assert_eq!(cpu.a(), 15);
    assert_eq!(cpu.bus().read(0x0200), Some(15));
    assert_eq!(cpu.x(), 0);
}

#[test]
fn test_block_copy_with_indirect_indexing() {
    let program = [
        0xA0, 0x00, // LDY #$00
        0xB1, 0x10, // loop: LDA ($10),Y
        0x91, 0x12, // STA ($12),Y
        0xC8, // INY
        0xC0, 0x04, // CPY #$04
        0xD0, 0xF7, // BNE loop
        0x02, // KIL
    ];
    let mut cpu = setup_cpu(&program);
    for (offset, byte) in [0x00, 0x30, 0x00, 0x40].iter().enumerate() {
        cpu.bus_mut().write(0x0010 + offset as u16, *byte);
    }
    for (offset, byte) in [0xDE, 0xAD, 0xBE, 0xEF].iter().enumerate() {
        cpu.bus_mut().write(0x3000 + offset as u16, *byte);
    }

    run_until_halt(&mut cpu);

    for (offset, byte) in [0xDE, 0xAD, 0xBE, 0xEF].iter().enumerate() {
        assert_eq!(cpu.bus().read(0x4000 + offset as u16), Some(*byte));
    }
}
