//! Example: Interval Timer Driving IRQ
//!
//! A memory-mapped countdown timer shares the bus with 64K of RAM. The host
//! loop clocks the timer alongside the CPU and holds the IRQ line while the
//! timer's interrupt is pending. The interrupt handler acknowledges the timer
//! and counts interrupts in zero page.
//!
//! ```text
//! 0xD000: STATUS (read)   bit 7 = interrupt pending
//! 0xD001: CONTROL (write) bit 7 = acknowledge, bit 0 = enable
//! ```
//!
//! Run with `cargo run --example timer_irq`.

use rt6502::{Addressable, Bus, Cpu, DeviceError, RamDevice};
use std::cell::RefCell;
use std::rc::Rc;

const TIMER_BASE: u16 = 0xD000;
const RELOAD: u16 = 1000;
const COUNTER_ADDRESS: u16 = 0x0010;

/// Countdown timer that raises an interrupt every `reload` ticks while enabled.
struct Timer {
    base: u16,
    counter: u16,
    reload: u16,
    enabled: bool,
    pending: bool,
}

impl Timer {
    fn new(base: u16, reload: u16) -> Self {
        Self {
            base,
            counter: reload,
            reload,
            enabled: false,
            pending: false,
        }
    }

    fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        self.counter -= 1;
        if self.counter == 0 {
            self.pending = true;
            self.counter = self.reload;
        }
    }
}

impl Addressable for Timer {
    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        true
    }

    fn address_start(&self) -> u16 {
        self.base
    }

    fn address_end(&self) -> u16 {
        self.base + 1
    }

    fn read(&self, address: u16) -> Option<u8> {
        // CONTROL is write-only, so its reads fall through to the next device
        (address == self.base).then_some(if self.pending { 0x80 } else { 0x00 })
    }

    fn write(&mut self, address: u16, data: u8) -> bool {
        if address != self.base + 1 {
            return false;
        }
        if data & 0x80 != 0 {
            self.pending = false;
        }
        self.enabled = data & 0x01 != 0;
        true
    }
}

fn main() -> Result<(), DeviceError> {
    let mut ram = RamDevice::new(0x0000, 0xFFFF)?;
    ram.load(0xFFFC, &[0x00, 0x80])?;
    ram.load(0xFFFE, &[0x00, 0x90])?;
    // LDA #$01; STA $D001; CLI; JMP *
    ram.load(0x8000, &[0xA9, 0x01, 0x8D, 0x01, 0xD0, 0x58, 0x4C, 0x06, 0x80])?;
    // LDA #$81; STA $D001; INC $10; RTI
    ram.load(0x9000, &[0xA9, 0x81, 0x8D, 0x01, 0xD0, 0xE6, 0x10, 0x40])?;

    let timer = Rc::new(RefCell::new(Timer::new(TIMER_BASE, RELOAD)));
    let mut bus = Bus::new();
    bus.attach(Box::new(Rc::clone(&timer)));
    bus.attach(Box::new(ram));

    let mut cpu = Cpu::new(bus);
    for _ in 0..10_500 {
        timer.borrow_mut().tick();
        if timer.borrow().pending {
            cpu.irq();
        }
        cpu.tick();
    }

    println!(
        "{} ticks, {} timer interrupts handled",
        cpu.total_ticks(),
        cpu.bus().read(COUNTER_ADDRESS).unwrap_or_default()
    );
    Ok(())
}
