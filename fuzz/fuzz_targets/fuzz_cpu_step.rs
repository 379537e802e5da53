//! Fuzz target for CPU tick execution.
//!
//! This target creates arbitrary register state and memory contents, then
//! ticks the CPU through a burst of operations, optionally raising an
//! interrupt, and checks the core's invariants after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rt6502::{Addressable, Cpu, RamDevice, Status};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes placed at 0x8000
    program: [u8; 32],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
enum Signal {
    None,
    Irq,
    Nmi,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    signals: Vec<Signal>,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(mut ram) = RamDevice::new(0x0000, 0xFFFF) else {
        return;
    };

    // Reset, NMI and IRQ vectors
    let _ = ram.load(0xFFFA, &[0x00, 0xA0, 0x00, 0x80, 0x00, 0x90]);
    let _ = ram.load(0x8000, &input.memory.program);
    let _ = ram.load(0x0000, &input.memory.zero_page);
    let _ = ram.load(0x0100, &input.memory.stack_page);

    let mut cpu = Cpu::new(ram);
    cpu.step();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for signal in input.signals.iter().take(64) {
        match signal {
            Signal::None => {}
            Signal::Irq => cpu.irq(),
            Signal::Nmi => cpu.nmi(),
        }

        let ticks = cpu.step();

        // These should never fail. If they do, we found a bug
        assert!(ticks >= 1);
        assert!(cpu.is_operation_complete() || cpu.is_halted());
        assert!(cpu.status().contains(Status::UNUSED));
        assert!(cpu.bus().contains(cpu.pc()));

        if cpu.is_halted() {
            break;
        }
    }
});
