use log::debug;

pub const FLAG_COUNT: usize = u8::BITS as usize;

pub trait FlagSet {
    fn new() -> Self;
    fn set(&mut self, slot: usize, value: bool);
    fn get(&self, slot: usize) -> bool;
    fn reset(&mut self);
    fn len(&self) -> usize;
}

/// Stores up to 8 booleans in the bits of one `u8`.
/// Slot `i` maps to bit `i`, least significant bit first.
/// Writes to slots outside [0,7] are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteFlagSet {
    value: u8,
}

impl ByteFlagSet {
    /// Decodes the packed byte into one boolean per slot, slot 0 first.
    pub fn to_array(&self) -> [bool; FLAG_COUNT] {
        let mut value = self.value;
        let mut array = [false; FLAG_COUNT];
        for flag in array.iter_mut() {
            *flag = value & 1 != 0;
            value >>= 1;
        }
        array
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

impl FlagSet for ByteFlagSet {
    fn new() -> Self {
        Self { value: 0 }
    }

    fn set(&mut self, slot: usize, value: bool) {
        if slot >= FLAG_COUNT {
            debug!("slot {} out of range, write ignored", slot);
            return;
        }
        if value {
            self.value |= 1 << slot;
        } else {
            self.value &= !(1 << slot);
        }
    }

    fn get(&self, slot: usize) -> bool {
        if slot >= FLAG_COUNT {
            return false;
        }
        self.value & (1 << slot) != 0
    }

    fn reset(&mut self) {
        self.value = 0;
    }

    fn len(&self) -> usize {
        FLAG_COUNT
    }
}

impl From<u8> for ByteFlagSet {
    fn from(value: u8) -> Self {
        Self { value }
    }
}

impl From<ByteFlagSet> for u8 {
    fn from(flags: ByteFlagSet) -> u8 {
        flags.value
    }
}
