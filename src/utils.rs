//! Common tools

/// The state of a bit,
/// It's either [`BitState::Clear`] to represent a 0
/// or [`BitState::Set`] to represent a 1
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BitState {
    /// Bit is 0
    Clear,
    /// Bit is 1
    Set,
}

/// Simple bit ops
///
/// Bit positions are taken modulo 8, so an out-of-range position never panics.
pub trait BitOps {
    #[allow(missing_docs)]
    fn set_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn clear_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn check_bit(&self, pos: u8) -> BitState;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) -> Self {
        *self |= 1u8 << (pos & 0b111);
        *self
    }

    fn clear_bit(&mut self, pos: u8) -> Self {
        *self &= !(1u8 << (pos & 0b111));
        *self
    }

    fn check_bit(&self, pos: u8) -> BitState {
        match (*self >> (pos & 0b111)) & 1 == 1 {
            true => BitState::Set,
            false => BitState::Clear,
        }
    }
}
