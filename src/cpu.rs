//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct representing the 6502 processor state
//! and its cycle-stepped execution loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status register**: packed [`Status`] byte (NV-BDIZC)
//! - **Cycle counter**: ticks left before the in-flight operation completes
//! - **Interrupt request**: at most one pending IRQ or NMI
//!
//! ## Execution Model
//!
//! The host drives the processor one clock tick at a time:
//! - [`Cpu::tick`]: advance one clock cycle
//! - [`Cpu::step`]: tick until the in-flight operation completes
//! - [`Cpu::run_for_ticks`]: tick a fixed number of times
//!
//! When the cycle counter is zero, a tick either services the pending
//! interrupt or fetches, resolves and executes the next instruction, loading
//! the counter with that operation's cost. Every tick then decrements the
//! counter, so an instruction's effects become visible on its first tick and
//! the following ticks only burn time.
//!
//! ## Interrupts
//!
//! [`Cpu::irq`] and [`Cpu::nmi`] only latch a request. The request is examined
//! at the next operation boundary: an NMI is always serviced, an IRQ only when
//! the Interrupt Disable flag is clear. A request that is not serviced at that
//! boundary is dropped, and a second request before the boundary replaces the
//! first.

use crate::instructions;
use crate::{Addressable, Operand, OperationTable, Status, OPEN_BUS_VALUE};
use log::{debug, trace};

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian maskable interrupt (IRQ/BRK) vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Address of the little-endian non-maskable interrupt vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

const RESET_CYCLES: u8 = 8;
const IRQ_CYCLES: u8 = 7;
const NMI_CYCLES: u8 = 8;

/// Interrupt request latched for the next operation boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InterruptRequest {
    /// Nothing pending.
    #[default]
    None,
    /// IRQ, masked by the Interrupt Disable flag.
    Maskable,
    /// NMI, serviced regardless of Interrupt Disable.
    NonMaskable,
}

/// 6502 CPU state and execution context.
///
/// The CPU owns its bus for the whole emulation session. It is generic over
/// the bus so hosts can plug in a [`Bus`](crate::Bus) of devices, a single
/// device, or their own [`Addressable`] implementation.
///
/// # Type Parameters
///
/// * `B` - Memory bus implementation (must implement [`Addressable`])
///
/// # Examples
///
/// ```
/// use rt6502::{Bus, Cpu, RamDevice};
///
/// let mut ram = RamDevice::new(0x0000, 0xFFFF).unwrap();
/// ram.load(0xFFFC, &[0x00, 0x80]).unwrap(); // reset vector -> 0x8000
/// ram.load(0x8000, &[0xA9, 0x42]).unwrap(); // LDA #$42
///
/// let mut bus = Bus::new();
/// bus.attach(Box::new(ram));
///
/// // Construction performs a reset
/// let mut cpu = Cpu::new(bus);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.cycles_remaining(), 8);
///
/// // Burn the reset latency, then run one instruction
/// assert_eq!(cpu.step(), 8);
/// assert_eq!(cpu.step(), 2);
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct Cpu<B: Addressable> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives full stack address)
    pub(crate) sp: u8,

    /// Status register
    pub(crate) status: Status,

    /// Ticks left before the current operation completes
    pub(crate) cycles_remaining: u8,

    /// Latched interrupt request
    pub(crate) pending: InterruptRequest,

    /// Set by a jam opcode, cleared by reset
    pub(crate) halted: bool,

    /// Ticks delivered since construction
    total_ticks: u64,

    operations: OperationTable,

    pub(crate) bus: B,
}

impl<B: Addressable> Cpu<B> {
    /// Creates a CPU attached to `bus` and performs a reset.
    ///
    /// The operation table is built here, so every CPU carries its own.
    pub fn new(bus: B) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::default(),
            cycles_remaining: 0,
            pending: InterruptRequest::None,
            halted: false,
            total_ticks: 0,
            operations: OperationTable::new(),
            bus,
        };
        cpu.reset();
        cpu
    }

    /// Puts the processor into its reset state.
    ///
    /// - A, X, Y and SP are zeroed
    /// - Status holds only Unused and Interrupt Disable
    /// - Any pending interrupt and the halted state are cleared
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - The cycle counter is set to 8 to model the reset sequence
    ///
    /// The total tick counter is not touched.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0;
        self.status = Status::default();
        self.pending = InterruptRequest::None;
        self.halted = false;
        self.pc = self.read_word(RESET_VECTOR);
        self.cycles_remaining = RESET_CYCLES;

        debug!("reset: pc=${:04X}", self.pc);
    }

    /// Requests a maskable interrupt at the next operation boundary.
    pub fn irq(&mut self) {
        self.request(InterruptRequest::Maskable);
    }

    /// Requests a non-maskable interrupt at the next operation boundary.
    pub fn nmi(&mut self) {
        self.request(InterruptRequest::NonMaskable);
    }

    fn request(&mut self, request: InterruptRequest) {
        if self.halted {
            trace!("{request:?} ignored while halted");
            return;
        }
        self.pending = request;
    }

    /// Advances the processor by one clock cycle.
    ///
    /// A halted processor only counts the tick.
    ///
    /// # Examples
    ///
    /// ```
    /// use rt6502::{Cpu, RamDevice};
    ///
    /// let mut ram = RamDevice::new(0x0000, 0xFFFF).unwrap();
    /// ram.load(0xFFFC, &[0x00, 0x02]).unwrap();
    /// ram.load(0x0200, &[0xE8]).unwrap(); // INX
    ///
    /// let mut cpu = Cpu::new(ram);
    /// for _ in 0..8 {
    ///     cpu.tick();
    /// }
    /// assert!(cpu.is_operation_complete());
    ///
    /// // INX takes effect on its first tick
    /// cpu.tick();
    /// assert_eq!(cpu.x(), 1);
    /// assert!(!cpu.is_operation_complete());
    ///
    /// cpu.tick();
    /// assert!(cpu.is_operation_complete());
    /// ```
    pub fn tick(&mut self) {
        self.total_ticks = self.total_ticks.wrapping_add(1);
        if self.halted {
            return;
        }

        if self.cycles_remaining == 0 {
            if self.interrupt_serviceable() {
                self.service_interrupt();
            } else {
                self.execute();
            }
            self.pending = InterruptRequest::None;
            self.status.set(Status::UNUSED, true);
        }

        if self.cycles_remaining > 0 {
            self.cycles_remaining -= 1;
        }
    }

    /// Ticks until the in-flight operation completes and returns the number
    /// of ticks consumed.
    ///
    /// Called at an operation boundary this runs exactly one instruction or
    /// interrupt sequence. Stops early if the processor halts.
    pub fn step(&mut self) -> u8 {
        let mut count: u8 = 0;
        loop {
            self.tick();
            count = count.wrapping_add(1);
            if self.cycles_remaining == 0 || self.halted {
                return count;
            }
        }
    }

    /// Ticks `budget` times and returns the number of ticks delivered.
    ///
    /// Useful for frame-locked hosts that give the processor a fixed number of
    /// cycles per frame.
    pub fn run_for_ticks(&mut self, budget: u64) -> u64 {
        let start = self.total_ticks;
        for _ in 0..budget {
            self.tick();
        }
        self.total_ticks.wrapping_sub(start)
    }

    fn interrupt_serviceable(&self) -> bool {
        match self.pending {
            InterruptRequest::None => false,
            InterruptRequest::Maskable => !self.status.contains(Status::INTERRUPT_DISABLE),
            InterruptRequest::NonMaskable => true,
        }
    }

    fn service_interrupt(&mut self) {
        let (vector, cycles) = match self.pending {
            InterruptRequest::None => return,
            InterruptRequest::Maskable => (IRQ_VECTOR, IRQ_CYCLES),
            InterruptRequest::NonMaskable => (NMI_VECTOR, NMI_CYCLES),
        };

        self.push_word(self.pc);
        self.push(self.status.pushed_by_hardware());
        self.status.set(Status::INTERRUPT_DISABLE, true);
        let return_address = self.pc;
        self.pc = self.read_word(vector);
        self.cycles_remaining = cycles;

        debug!(
            "{:?} interrupt: ${:04X} -> ${:04X}",
            self.pending, return_address, self.pc
        );
    }

    /// Fetches, resolves and executes one instruction.
    fn execute(&mut self) {
        let address = self.pc;
        let opcode = self.read_next_byte();
        let operation = self.operations[opcode];

        trace!(
            "${address:04X}: {opcode:02X} {} {:?}",
            operation.mnemonic,
            operation.mode
        );

        let resolved = self.resolve(operation.mode);
        self.cycles_remaining = operation.cycles;
        let wants_extra_cycle = instructions::execute(self, operation.instruction, resolved.operand);
        if resolved.page_crossed && wants_extra_cycle {
            self.cycles_remaining += 1;
        }
    }

    // ========== Bus Helpers ==========

    /// Reads a byte, substituting the open-bus value for unclaimed addresses.
    pub(crate) fn read(&self, address: u16) -> u8 {
        self.bus.read(address).unwrap_or(OPEN_BUS_VALUE)
    }

    /// Writes a byte; a declined write is dropped.
    pub(crate) fn write(&mut self, address: u16, data: u8) {
        self.bus.write(address, data);
    }

    pub(crate) fn read_word(&self, address: u16) -> u16 {
        u16::from_le_bytes([self.read(address), self.read(address.wrapping_add(1))])
    }

    pub(crate) fn read_next_byte(&mut self) -> u8 {
        let value = self.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    pub(crate) fn read_next_word(&mut self) -> u16 {
        let low = self.read_next_byte();
        let high = self.read_next_byte();
        u16::from_le_bytes([low, high])
    }

    /// Reads the instruction operand: the accumulator or the byte at the
    /// effective address. Implied operands read as the open-bus value.
    pub(crate) fn fetch(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Implied => OPEN_BUS_VALUE,
            Operand::Accumulator => self.a,
            Operand::Address(address) => self.read(address),
        }
    }

    /// Writes an instruction result back to where [`Cpu::fetch`] read it from.
    pub(crate) fn store(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Implied => {}
            Operand::Accumulator => self.a = value,
            Operand::Address(address) => self.write(address, value),
        }
    }

    // ========== Stack Helpers ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.write(STACK_PAGE | u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_PAGE | u16::from(self.sp))
    }

    /// Pushes high byte first so the word reads little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push(high);
        self.push(low);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let low = self.pull();
        let high = self.pull();
        u16::from_le_bytes([low, high])
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 | SP. The stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    ///
    /// # Examples
    ///
    /// ```
    /// use rt6502::{Cpu, RamDevice, Status};
    ///
    /// let cpu = Cpu::new(RamDevice::new(0x0000, 0xFFFF).unwrap());
    ///
    /// assert_eq!(cpu.status().bits(), Status::UNUSED | Status::INTERRUPT_DISABLE);
    /// ```
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true when no operation is in flight.
    pub fn is_operation_complete(&self) -> bool {
        self.cycles_remaining == 0
    }

    /// Returns the ticks left before the current operation completes.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles_remaining
    }

    /// Returns true once a jam opcode has stopped the processor.
    ///
    /// Only [`Cpu::reset`] restarts a halted processor.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns the interrupt request latched for the next boundary.
    pub fn pending_interrupt(&self) -> InterruptRequest {
        self.pending
    }

    /// Returns the number of ticks delivered since construction.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Returns the operation table used for dispatch.
    pub fn operations(&self) -> &OperationTable {
        &self.operations
    }

    /// Returns a shared reference to the bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Returns a mutable reference to the bus, for loading programs or
    /// poking peripherals between ticks.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the CPU and returns its bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.contains(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.contains(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.contains(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.contains(Status::CARRY)
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the status register. The Unused bit stays set.
    pub fn set_status(&mut self, value: u8) {
        self.status = Status::from_bits(value);
    }
}
