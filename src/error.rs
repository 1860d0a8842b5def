/// Error type for all driver operations.
///
/// Parameter errors are detected before any bus activity; an operation that
/// returns one has not touched the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Device address outside the MCP23017 range 0x20..=0x27.
    InvalidAddress(u8),
    /// Port selector other than 0 ("A") or 1 ("B").
    InvalidPort(u8),
    /// Bit index outside 0..=7.
    InvalidBit(u8),
    /// The underlying bus transaction failed.
    Bus(E),
}
