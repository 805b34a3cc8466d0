// NES Emulator Library
// Core library for the NES emulator implementation

// Public modules
pub mod bus;
pub mod cartridge;
pub mod coordinator;
pub mod cpu;
pub mod debug;
pub mod input;
pub mod interrupt;
pub mod palette;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use bus::{CpuBus, MemoryMappedDevice};
pub use cartridge::{Cartridge, Mapper, Mirroring, RomError};
pub use coordinator::{Coordinator, CoordinatorConfig, Core, FrameBuffer, RunOutcome};
pub use cpu::{Cpu, CpuError};
pub use debug::{LogLevel, Logger, TraceEntry};
pub use input::{Controller, ControllerIO};
pub use interrupt::{InterruptKind, InterruptLatch};
pub use ppu::Ppu;
pub use ram::Ram;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_components_can_be_instantiated() {
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _bus = CpuBus::new_headless();
        let _controller = Controller::new();
        let _controller_io = ControllerIO::new();
        let _ram = Ram::new();
        let _latch = InterruptLatch::new();
    }
}
