//! GPIO pin abstraction
//!
//! Minimal infallible pin traits. The wagon's GPIO cannot fail, so
//! these avoid dragging fallible signatures through the drivers; the
//! firmware crate adapts its HAL pin types to them.

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads a high level
    fn is_high(&self) -> bool;
}

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high
    fn set_high(&mut self);

    /// Drive the pin low
    fn set_low(&mut self);
}
