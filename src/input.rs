// Standard NES controller emulation: two ports mapped to CPU addresses
// $4016 (read/write) and $4017 (read only, since writes there target the
// APU frame counter, which this crate does not implement).
//
// ## Reading sequence
//
// 1. Write $01 to $4016 (strobe high) - the shift registers continuously
//    reload from the live button state.
// 2. Write $00 to $4016 (strobe low) - each port now serializes its
//    latched state one bit per read.
// 3. Read $4016 eight times for controller 1, $4017 eight times for
//    controller 2. Order: A, B, Select, Start, Up, Down, Left, Right.
// 4. Reads past the 8th return the open-bus "1" signature used by real
//    third-party controllers/peripherals with no further data to shift.

use crate::bus::MemoryMappedDevice;

const BUTTON_COUNT: u8 = 8;

/// Button state for one standard NES controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Controller {
    pub button_a: bool,
    pub button_b: bool,
    pub select: bool,
    pub start: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Controller {
    /// A controller with every button released.
    ///
    /// ```
    /// use nes_core::input::Controller;
    ///
    /// let controller = Controller::new();
    /// assert!(!controller.button_a);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a controller state from an 8-bit mask, bit 0 = A through bit 7
    /// = Right, matching the byte the coordinator reads out of the host's
    /// `Arc<AtomicU8>` joypad state each step.
    pub fn from_bits(bits: u8) -> Self {
        Controller {
            button_a: bits & 0x01 != 0,
            button_b: bits & 0x02 != 0,
            select: bits & 0x04 != 0,
            start: bits & 0x08 != 0,
            up: bits & 0x10 != 0,
            down: bits & 0x20 != 0,
            left: bits & 0x40 != 0,
            right: bits & 0x80 != 0,
        }
    }

    /// Button state at shift position `index` (0=A through 7=Right).
    fn get_button(&self, index: u8) -> bool {
        match index {
            0 => self.button_a,
            1 => self.button_b,
            2 => self.select,
            3 => self.start,
            4 => self.up,
            5 => self.down,
            6 => self.left,
            7 => self.right,
            _ => false,
        }
    }
}

/// One port's shift-register state: the latched button snapshot plus how
/// far it has been read out since the last strobe.
#[derive(Debug, Clone, Copy, Default)]
struct Port {
    controller: Controller,
    index: u8,
}

impl Port {
    fn read(&mut self, strobing: bool) -> u8 {
        let bit = if strobing {
            self.controller.button_a
        } else {
            self.index < BUTTON_COUNT && self.controller.get_button(self.index)
        };

        if !strobing && self.index < BUTTON_COUNT {
            self.index += 1;
        }

        bit as u8
    }

    fn reset_index(&mut self) {
        self.index = 0;
    }
}

/// Both controller ports and the shared strobe line.
///
/// Button states are pushed in from the host via [`ControllerIO::set_controller1`]
/// and [`ControllerIO::set_controller2`]; everything else models the
/// strobe-and-shift protocol the CPU sees at $4016/$4017.
pub struct ControllerIO {
    ports: [Port; 2],
    strobe: bool,
}

impl ControllerIO {
    /// ```
    /// use nes_core::input::ControllerIO;
    ///
    /// let controller_io = ControllerIO::new();
    /// ```
    pub fn new() -> Self {
        ControllerIO {
            ports: [Port::default(); 2],
            strobe: false,
        }
    }

    /// Reset to power-on state: strobe low, both shift positions at 0.
    pub fn reset(&mut self) {
        self.strobe = false;
        for port in &mut self.ports {
            port.reset_index();
        }
    }

    fn write_strobe(&mut self, data: u8) {
        let new_strobe = (data & 0x01) != 0;
        if self.strobe && !new_strobe {
            for port in &mut self.ports {
                port.reset_index();
            }
        }
        self.strobe = new_strobe;
    }

    /// Push a new button snapshot for controller 1.
    pub fn set_controller1(&mut self, controller: Controller) {
        self.ports[0].controller = controller;
    }

    /// Push a new button snapshot for controller 2.
    pub fn set_controller2(&mut self, controller: Controller) {
        self.ports[1].controller = controller;
    }
}

impl MemoryMappedDevice for ControllerIO {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x4016 => self.ports[0].read(self.strobe),
            0x4017 => self.ports[1].read(self.strobe),
            _ => 0,
        }
    }

    /// $4016 carries the strobe bit; $4017 writes are the APU frame
    /// counter's register and are not handled by this device.
    fn write(&mut self, addr: u16, data: u8) {
        if addr == 0x4016 {
            self.write_strobe(data);
        }
    }
}

impl Default for ControllerIO {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(buttons: &[usize]) -> Controller {
        let mut bits = 0u8;
        for &b in buttons {
            bits |= 1 << b;
        }
        Controller::from_bits(bits)
    }

    fn strobe_cycle(io: &mut ControllerIO) {
        io.write(0x4016, 0x01);
        io.write(0x4016, 0x00);
    }

    #[test]
    fn new_controller_has_every_button_released() {
        let controller = Controller::new();
        assert!(!controller.button_a);
        assert!(!controller.right);
    }

    #[test]
    fn from_bits_maps_lsb_to_a_and_msb_to_right() {
        let controller = Controller::from_bits(0b1000_0001);
        assert!(controller.button_a);
        assert!(controller.right);
        assert!(!controller.button_b);
    }

    #[test]
    fn fresh_controller_io_starts_with_strobe_low() {
        let io = ControllerIO::new();
        assert!(!io.strobe);
        assert_eq!(io.ports[0].index, 0);
        assert_eq!(io.ports[1].index, 0);
    }

    #[test]
    fn reset_clears_strobe_and_both_shift_positions() {
        let mut io = ControllerIO::new();
        io.strobe = true;
        io.ports[0].index = 5;
        io.ports[1].index = 3;

        io.reset();

        assert!(!io.strobe);
        assert_eq!(io.ports[0].index, 0);
        assert_eq!(io.ports[1].index, 0);
    }

    #[test]
    fn strobe_high_then_low_is_the_documented_reload_sequence() {
        let mut io = ControllerIO::new();
        io.write(0x4016, 0x01);
        assert!(io.strobe);
        io.write(0x4016, 0x00);
        assert!(!io.strobe);
    }

    #[test]
    fn reading_mid_sequence_then_restrobing_resets_the_shift_position() {
        let mut io = ControllerIO::new();
        strobe_cycle(&mut io);
        io.read(0x4016);
        io.read(0x4016);
        io.read(0x4016);
        assert_eq!(io.ports[0].index, 3);

        strobe_cycle(&mut io);
        assert_eq!(io.ports[0].index, 0);
    }

    #[test]
    fn controller1_serializes_lsb_first_with_no_buttons_pressed() {
        let mut io = ControllerIO::new();
        strobe_cycle(&mut io);
        for _ in 0..8 {
            assert_eq!(io.read(0x4016), 0x00);
        }
        assert_eq!(io.read(0x4016), 0x01, "9th read is the open-bus signature");
    }

    #[test]
    fn controller1_reports_a_select_and_up_in_shift_order() {
        let mut io = ControllerIO::new();
        io.set_controller1(pressed(&[0, 2, 4])); // A, Select, Up
        strobe_cycle(&mut io);

        let bits: Vec<u8> = (0..8).map(|_| io.read(0x4016)).collect();
        assert_eq!(bits, [1, 0, 1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn controller2_reports_b_and_start_in_shift_order() {
        let mut io = ControllerIO::new();
        io.set_controller2(pressed(&[1, 3])); // B, Start
        strobe_cycle(&mut io);

        let bits: Vec<u8> = (0..8).map(|_| io.read(0x4017)).collect();
        assert_eq!(bits, [0, 1, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn strobe_held_high_always_rereads_button_a_without_advancing() {
        let mut io = ControllerIO::new();
        io.set_controller1(pressed(&[0]));
        io.write(0x4016, 0x01);

        assert_eq!(io.read(0x4016), 0x01);
        assert_eq!(io.read(0x4016), 0x01);
        assert_eq!(io.read(0x4016), 0x01);
        assert_eq!(io.ports[0].index, 0);
    }

    #[test]
    fn a_second_strobe_cycle_restarts_the_sequence_from_button_a() {
        let mut io = ControllerIO::new();
        strobe_cycle(&mut io);
        for _ in 0..8 {
            io.read(0x4016);
        }

        strobe_cycle(&mut io);
        assert_eq!(io.ports[0].index, 0);
    }

    #[test]
    fn reads_past_eight_stay_pinned_to_the_signature_bit_for_hundreds_of_reads() {
        let mut io = ControllerIO::new();
        io.set_controller1(pressed(&[0]));
        strobe_cycle(&mut io);

        assert_eq!(io.read(0x4016), 0x01);
        for _ in 1..8 {
            assert_eq!(io.read(0x4016), 0x00);
        }
        for i in 9..=300 {
            assert_eq!(io.read(0x4016), 0x01, "read {i} should stay pinned at 1");
        }
        assert_eq!(io.ports[0].index, 8);
    }

    #[test]
    fn the_two_ports_shift_independently() {
        let mut io = ControllerIO::new();
        io.set_controller1(pressed(&[0]));
        io.set_controller2(pressed(&[1]));
        strobe_cycle(&mut io);

        assert_eq!(io.read(0x4016), 0x01); // controller 1: A
        assert_eq!(io.read(0x4017), 0x00); // controller 2: A released
        assert_eq!(io.read(0x4017), 0x01); // controller 2: B
    }

    #[test]
    fn writes_to_4017_are_ignored_rather_than_touching_the_strobe() {
        let mut io = ControllerIO::new();
        io.write(0x4017, 0x01);
        assert!(!io.strobe);
    }
}
