//! # NMOS 6502 CPU Emulator Core
//!
//! A behavioral, cycle-counted NMOS 6502 emulator with a composable device bus.
//!
//! The processor is driven one clock tick at a time. Each instruction executes
//! completely on its first tick and then holds the core busy for the rest of
//! its documented cycle cost, so hosts can interleave the CPU with other
//! clocked chips at cycle granularity without modelling per-cycle bus traffic.
//!
//! ## Quick Start
//!
//! ```rust
//! use rt6502::{Bus, Cpu, RamDevice, RomDevice};
//!
//! let mut bus = Bus::new();
//!
//! // RAM for zero page, stack and program data
//! let mut ram = RamDevice::new(0x0000, 0x7FFF).unwrap();
//! ram.load(0x0200, &[0xA9, 0x05, 0x69, 0x03, 0x85, 0x10]).unwrap(); // LDA #5, ADC #3, STA $10
//! bus.attach(Box::new(ram));
//!
//! // ROM holding the reset vector
//! let mut image = vec![0x00; 0x100];
//! image[0xFC] = 0x00;
//! image[0xFD] = 0x02;
//! bus.attach(Box::new(RomDevice::new(0xFF00, image).unwrap()));
//!
//! let mut cpu = Cpu::new(bus);
//! assert_eq!(cpu.pc(), 0x0200);
//!
//! cpu.step(); // reset sequence
//! cpu.step(); // LDA
//! cpu.step(); // ADC
//! cpu.step(); // STA
//!
//! assert_eq!(cpu.a(), 8);
//! assert_eq!(cpu.bus().read_or_open(0x0010), 8);
//! ```
//!
//! ## Architecture
//!
//! - **Devices** implement [`Addressable`]: an inclusive address range plus
//!   read/write operations that may decline an access.
//! - The [`Bus`] routes each access to the first attached device that claims
//!   the address. Unclaimed reads yield [`OPEN_BUS_VALUE`].
//! - The [`Cpu`] owns its bus and its own [`OperationTable`]. Dispatch resolves
//!   the addressing mode into a [`Resolved`] value and hands the operand to the
//!   instruction, with no state shared between the two steps.
//!
//! ## Modules
//!
//! - `cpu` - Processor state, tick/step loop, interrupts
//! - `bus` - Ordered device routing
//! - `memory` - The [`Addressable`] device contract
//! - `devices` - RAM and ROM peripherals
//! - `opcodes` - The 256-entry operation table
//! - `addressing` - Addressing modes and operand resolution
//! - `status` - The processor status register

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand, Resolved};
pub use bus::{Bus, OPEN_BUS_VALUE};
pub use cpu::{Cpu, InterruptRequest};
pub use devices::{DeviceError, RamDevice, RomDevice};
pub use memory::Addressable;
pub use opcodes::{Instruction, Operation, OperationTable};
pub use status::Status;
