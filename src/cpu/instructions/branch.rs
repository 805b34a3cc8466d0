// Branch instructions. All eight share one cycle rule: +1 cycle if the
// branch is taken, +1 more on top of that if the branch crosses a page.

use crate::cpu::addressing::Resolved;
use crate::cpu::Cpu;

impl Cpu {
    fn branch_if(&mut self, condition: bool, resolved: &Resolved) -> u8 {
        if !condition {
            return 0;
        }
        let target = resolved.operand.address().expect("branch operand is always an address");
        let extra = if resolved.page_crossed { 2 } else { 1 };
        self.pc = target;
        extra
    }

    pub(crate) fn bcc(&mut self, resolved: &Resolved) -> u8 {
        self.branch_if(!self.get_carry(), resolved)
    }

    pub(crate) fn bcs(&mut self, resolved: &Resolved) -> u8 {
        self.branch_if(self.get_carry(), resolved)
    }

    pub(crate) fn beq(&mut self, resolved: &Resolved) -> u8 {
        self.branch_if(self.get_zero(), resolved)
    }

    pub(crate) fn bne(&mut self, resolved: &Resolved) -> u8 {
        self.branch_if(!self.get_zero(), resolved)
    }

    pub(crate) fn bpl(&mut self, resolved: &Resolved) -> u8 {
        self.branch_if(!self.get_negative(), resolved)
    }

    pub(crate) fn bmi(&mut self, resolved: &Resolved) -> u8 {
        self.branch_if(self.get_negative(), resolved)
    }

    pub(crate) fn bvc(&mut self, resolved: &Resolved) -> u8 {
        self.branch_if(!self.get_overflow(), resolved)
    }

    pub(crate) fn bvs(&mut self, resolved: &Resolved) -> u8 {
        self.branch_if(self.get_overflow(), resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::addressing::Operand;

    fn resolved(addr: u16, page_crossed: bool) -> Resolved {
        Resolved { operand: Operand::Address(addr), page_crossed }
    }

    #[test]
    fn not_taken_costs_nothing() {
        let mut cpu = Cpu::new();
        cpu.pc = 0x1000;
        cpu.set_carry(true);
        let extra = cpu.bcc(&resolved(0x1010, false));
        assert_eq!(extra, 0);
        assert_eq!(cpu.pc, 0x1000);
    }

    #[test]
    fn taken_same_page_costs_one() {
        let mut cpu = Cpu::new();
        cpu.pc = 0x1000;
        cpu.set_carry(false);
        let extra = cpu.bcc(&resolved(0x1010, false));
        assert_eq!(extra, 1);
        assert_eq!(cpu.pc, 0x1010);
    }

    #[test]
    fn taken_across_page_costs_two() {
        let mut cpu = Cpu::new();
        cpu.pc = 0x10F0;
        cpu.set_carry(false);
        let extra = cpu.bcc(&resolved(0x1110, true));
        assert_eq!(extra, 2);
        assert_eq!(cpu.pc, 0x1110);
    }
}
