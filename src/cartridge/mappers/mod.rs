// Mappers module - the cartridge mapper abstraction and its implementations
//
// `Mapper` is a capability set (read/write PRG, read/write CHR, mirroring)
// rather than a struct, so each mapper can own whatever bank-switching state
// it needs. This core ships exactly one implementation, NROM (mapper 0);
// `Cartridge::from_bytes` already rejects every other mapper id at load
// time, so `make_mapper` never has to fail.

mod mapper0;

use super::{Cartridge, Mirroring};
use mapper0::Mapper0;

/// CPU/PPU address-space capability set a cartridge exposes once loaded.
pub trait Mapper {
    fn read_prg(&self, addr: u16) -> u8;
    fn write_prg(&mut self, addr: u16, value: u8);
    fn read_chr(&self, addr: u16) -> u8;
    fn write_chr(&mut self, addr: u16, value: u8);
    fn mirroring(&self) -> Mirroring;
}

/// Build the mapper for an already-validated cartridge (`mapper_id == 0`).
pub fn make_mapper(cartridge: Cartridge) -> Box<dyn Mapper> {
    debug_assert_eq!(cartridge.mapper_id, 0, "only NROM is implemented");
    Box::new(Mapper0::new(cartridge))
}
