// Bus module - the CPU-visible memory map
//
// `CpuBus` connects the CPU to every memory-mapped device in the system:
// internal RAM, the PPU's eight ports (mirrored across $2000-$3FFF), the two
// joypad ports, the OAM-DMA trigger at $4014, and cartridge PRG space via
// the mapper. Reads of unmapped or write-only locations return the last
// byte driven onto the bus rather than a hardcoded zero, matching the NES's
// open-bus behavior.
//
// ```text
// $0000-$07FF: 2KB Internal RAM
// $0800-$1FFF: Mirrors of RAM (3 times)
// $2000-$2007: PPU Registers
// $2008-$3FFF: Mirrors of PPU Registers (repeating every 8 bytes)
// $4000-$4013, $4015, $4018-$401F: Unimplemented APU - open bus
// $4014: OAM DMA trigger
// $4016-$4017: Joypad 1/2
// $4020-$FFFF: Cartridge space (PRG-ROM/RAM via the mapper)
// ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::cartridge::Mapper;
use crate::input::ControllerIO;
use crate::ppu::Ppu;
use crate::ram::Ram;

/// A component mapped into the CPU's (or PPU's) address space. Reads take
/// `&mut self` because several implementors have read side effects:
/// PPUSTATUS clears the VBlank flag, PPUDATA advances the VRAM address and
/// refills its read buffer, and joypad reads shift to the next button.
pub trait MemoryMappedDevice {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
}

const OAM_DMA_BYTES: u16 = 256;

pub struct CpuBus {
    ram: Ram,
    ppu: Rc<RefCell<Ppu>>,
    mapper: Option<Rc<RefCell<Box<dyn Mapper>>>>,
    controllers: ControllerIO,
    open_bus: Cell<u8>,
    dma_cycles_remaining: u16,
    dma_just_triggered: bool,
    /// Backing store for $4020-$FFFF used only when no cartridge is
    /// attached, so unit tests can poke arbitrary program bytes without a
    /// mapper. Real cartridges always go through `mapper`.
    test_backing: Option<Box<[u8; 0xC000]>>,
}

impl CpuBus {
    pub fn new(ppu: Rc<RefCell<Ppu>>, mapper: Rc<RefCell<Box<dyn Mapper>>>) -> Self {
        CpuBus {
            ram: Ram::new(),
            ppu,
            mapper: Some(mapper),
            controllers: ControllerIO::new(),
            open_bus: Cell::new(0),
            dma_cycles_remaining: 0,
            dma_just_triggered: false,
            test_backing: None,
        }
    }

    /// A bus with no cartridge, backed by a plain writable array for
    /// $4020-$FFFF. Used by CPU/addressing unit tests that need to place
    /// arbitrary bytes (vectors, program code) without going through a
    /// mapper's write-is-ignored semantics.
    pub fn new_headless() -> Self {
        CpuBus {
            ram: Ram::new(),
            ppu: Rc::new(RefCell::new(Ppu::new())),
            mapper: None,
            controllers: ControllerIO::new(),
            open_bus: Cell::new(0),
            dma_cycles_remaining: 0,
            dma_just_triggered: false,
            test_backing: Some(Box::new([0; 0xC000])),
        }
    }

    pub fn ppu(&self) -> &Rc<RefCell<Ppu>> {
        &self.ppu
    }

    pub fn controllers_mut(&mut self) -> &mut ControllerIO {
        &mut self.controllers
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        let value = match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x3FFF => self.ppu.borrow_mut().read(addr & 0x0007),
            0x4016 | 0x4017 => self.controllers.read(addr),
            0x4000..=0x4015 | 0x4018..=0x401F => self.open_bus.get(),
            0x4020..=0xFFFF => self.read_cartridge_space(addr),
        };
        self.open_bus.set(value);
        value
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        self.open_bus.set(data);
        match addr {
            0x0000..=0x1FFF => self.ram.write(addr, data),
            0x2000..=0x3FFF => self.ppu.borrow_mut().write(addr & 0x0007, data),
            0x4014 => self.trigger_oam_dma(data),
            0x4016 | 0x4017 => self.controllers.write(addr, data),
            0x4000..=0x4013 | 0x4015 | 0x4018..=0x401F => {}
            0x4020..=0xFFFF => self.write_cartridge_space(addr, data),
        }
    }

    pub fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    fn read_cartridge_space(&self, addr: u16) -> u8 {
        if let Some(backing) = &self.test_backing {
            backing[(addr - 0x4020) as usize]
        } else if let Some(mapper) = &self.mapper {
            mapper.borrow().read_prg(addr)
        } else {
            self.open_bus.get()
        }
    }

    fn write_cartridge_space(&mut self, addr: u16, data: u8) {
        if let Some(backing) = &mut self.test_backing {
            backing[(addr - 0x4020) as usize] = data;
        } else if let Some(mapper) = &self.mapper {
            mapper.borrow_mut().write_prg(addr, data);
        }
    }

    /// Whether an OAM-DMA transfer is currently stalling the CPU.
    pub fn dma_active(&self) -> bool {
        self.dma_cycles_remaining > 0
    }

    /// Advance one stall cycle of an in-progress OAM-DMA transfer. Returns
    /// whether the transfer is still active after this cycle.
    ///
    /// The 256-byte copy itself happens eagerly when the transfer is
    /// triggered, since the CPU is halted for the whole transfer and no
    /// intermediate OAM state is ever observable. This just counts down
    /// the 513/514-cycle stall the real hardware imposes so `Cpu::step`
    /// reports an accurate cycle count for the instruction that wrote
    /// $4014.
    pub fn tick_dma(&mut self) -> bool {
        if self.dma_cycles_remaining > 0 {
            self.dma_cycles_remaining -= 1;
        }
        self.dma_active()
    }

    fn trigger_oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        let mut bytes = [0u8; OAM_DMA_BYTES as usize];
        for (i, slot) in bytes.iter_mut().enumerate() {
            *slot = self.read(base.wrapping_add(i as u16));
        }
        let mut ppu = self.ppu.borrow_mut();
        let start = ppu.oam_addr;
        for (i, byte) in bytes.iter().enumerate() {
            ppu.write_oam(start.wrapping_add(i as u8), *byte);
        }
        drop(ppu);

        self.dma_cycles_remaining = 513;
        self.dma_just_triggered = true;
    }

    /// Consumes the "a DMA was just triggered" flag. `Cpu::step` calls this
    /// right after executing the instruction that wrote $4014, and adds one
    /// more stall cycle if its own running cycle count was odd at that
    /// point - the 513-vs-514 split spec.md calls for.
    pub fn take_dma_trigger(&mut self) -> bool {
        std::mem::replace(&mut self.dma_just_triggered, false)
    }

    pub fn add_dma_stall_cycle(&mut self) {
        self.dma_cycles_remaining += 1;
    }
}
