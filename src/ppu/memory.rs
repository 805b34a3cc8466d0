// PPU memory access: pattern tables through the mapper, nametables with
// mirroring, and palette RAM with its $3F10/14/18/1C aliasing.

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::Mirroring;

/// Fold one of the four logical nametable slots (0-3) down to one of the
/// two physical 1KB banks the PPU actually owns, per mirroring mode.
fn physical_nametable_bank(mirroring: Mirroring, slot: usize) -> usize {
    match mirroring {
        // $2000/$2400 share a bank, as do $2800/$2C00: the high slot bit
        // (vertical position) decides the bank.
        Mirroring::Horizontal => slot >> 1,
        // $2000/$2800 share a bank, as do $2400/$2C00: the low slot bit
        // (horizontal position) decides the bank.
        Mirroring::Vertical => slot & 0x01,
        Mirroring::SingleScreen => 0,
        // Real four-screen mirroring needs cartridge-side VRAM this mapper
        // interface doesn't expose; fall back to horizontal.
        Mirroring::FourScreen => slot >> 1,
    }
}

impl Ppu {
    pub(super) fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let offset_in_space = (addr & 0x0FFF) as usize;
        let slot = offset_in_space / NAMETABLE_SIZE;
        let offset_in_table = offset_in_space % NAMETABLE_SIZE;
        physical_nametable_bank(self.mirroring, slot) * NAMETABLE_SIZE + offset_in_table
    }

    /// $3F10/$3F14/$3F18/$3F1C are wired to $3F00/$3F04/$3F08/$3F0C: the
    /// "sprite backdrop" slot of every sprite palette is really the
    /// universal background color.
    pub(super) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;
        let is_sprite_backdrop_alias = addr >= 16 && addr % 4 == 0;
        if is_sprite_backdrop_alias {
            addr - 16
        } else {
            addr
        }
    }

    pub(super) fn read_ppu_memory(&self, addr: u16) -> u8 {
        match addr & 0x3FFF {
            pattern_addr @ 0x0000..=0x1FFF => self
                .mapper
                .as_ref()
                .map(|mapper| mapper.borrow().read_chr(pattern_addr))
                .unwrap_or(0),
            nametable_addr @ 0x2000..=0x2FFF => {
                self.nametables[self.mirror_nametable_addr(nametable_addr)]
            }
            mirrored_addr @ 0x3000..=0x3EFF => {
                self.nametables[self.mirror_nametable_addr(mirrored_addr - 0x1000)]
            }
            palette_addr @ 0x3F00..=0x3FFF => {
                self.palette_ram[self.mirror_palette_addr(palette_addr)]
            }
            _ => unreachable!("address masked to 14 bits above"),
        }
    }

    pub(super) fn write_ppu_memory(&mut self, addr: u16, data: u8) {
        match addr & 0x3FFF {
            pattern_addr @ 0x0000..=0x1FFF => {
                if let Some(mapper) = &self.mapper {
                    mapper.borrow_mut().write_chr(pattern_addr, data);
                }
            }
            nametable_addr @ 0x2000..=0x2FFF => {
                let physical = self.mirror_nametable_addr(nametable_addr);
                self.nametables[physical] = data;
            }
            mirrored_addr @ 0x3000..=0x3EFF => {
                let physical = self.mirror_nametable_addr(mirrored_addr - 0x1000);
                self.nametables[physical] = data;
            }
            palette_addr @ 0x3F00..=0x3FFF => {
                let physical = self.mirror_palette_addr(palette_addr);
                self.palette_ram[physical] = data;
            }
            _ => unreachable!("address masked to 14 bits above"),
        }
    }
}
