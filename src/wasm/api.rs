//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for clocking the CPU, raising
//! interrupts and inspecting registers and memory.

use crate::{Addressable, Bus, Cpu, RamDevice};
use wasm_bindgen::prelude::*;

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: Cpu<Bus>,
    program_start: u16,
    program_end: u16,
}

fn ram_bus() -> Result<Bus, JsError> {
    let ram = RamDevice::new(0x0000, 0xFFFF).map_err(|e| JsError::new(&e.to_string()))?;
    let mut bus = Bus::new();
    bus.attach(Box::new(ram));
    Ok(bus)
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with 64 KiB of zeroed RAM
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Emulator6502, JsError> {
        Ok(Emulator6502 {
            cpu: Cpu::new(ram_bus()?),
            program_start: 0x0000,
            program_end: 0x0000,
        })
    }

    /// Advance one clock cycle
    pub fn tick(&mut self) {
        self.cpu.tick();
    }

    /// Run until the in-flight operation completes; returns ticks consumed
    pub fn step(&mut self) -> u8 {
        self.cpu.step()
    }

    /// Tick a fixed number of times
    pub fn run_for_ticks(&mut self, ticks: u32) -> u32 {
        self.cpu.run_for_ticks(u64::from(ticks)) as u32
    }

    /// Reset the CPU; memory contents are kept
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Request a maskable interrupt
    pub fn irq(&mut self) {
        self.cpu.irq();
    }

    /// Request a non-maskable interrupt
    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn total_ticks(&self) -> f64 {
        self.cpu.total_ticks() as f64 // u64 does not cross into JS numbers
    }

    #[wasm_bindgen(getter)]
    pub fn operation_complete(&self) -> bool {
        self.cpu.is_operation_complete()
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.bus().read_or_open(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.bus_mut().write(addr, value);
    }

    /// Copy a 256-byte page of memory into a typed array
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = u16::from(page) << 8;
        let bytes: Vec<u8> = (0..=0xFF)
            .map(|offset| self.cpu.bus().read_or_open(start | offset))
            .collect();
        js_sys::Uint8Array::from(bytes.as_slice())
    }

    /// Copy a program into memory, point the reset vector at it and reset
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        let bus = self.cpu.bus_mut();
        for (offset, &byte) in program.iter().enumerate() {
            bus.write(start_addr.wrapping_add(offset as u16), byte);
        }
        let [low, high] = start_addr.to_le_bytes();
        bus.write(crate::cpu::RESET_VECTOR, low);
        bus.write(crate::cpu::RESET_VECTOR + 1, high);

        self.cpu.reset();
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}
