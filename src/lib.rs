#![cfg_attr(not(test), no_std)]
//! Driver for the `MCP23017` "16-Bit I/O Expander with Serial Interface".
//!
//! The MCP23017 offers 16 configurable I/O lines, split into two eight-bit
//! ports ("A" and "B"), behind an I2C interface.  This crate lets you set the
//! mode of each line (output, input, input with pull-up, input with inverted
//! polarity) and read or write single lines or whole ports without dealing
//! with raw bus transactions or register addresses.
//!
//! The driver holds no state besides the bus handle; every operation reads
//! the device registers fresh.  Construct it once from any
//! [`embedded_hal::i2c::I2c`] implementation and address chips by their
//! 7-bit bus address (0x20..=0x27) on each call:
//!
//! ```
//! use embedded_hal_mock::eh1::i2c as mock_i2c;
//!
//! let mut i2c = mock_i2c::Mock::new(&[
//!     mock_i2c::Transaction::write_read(0x20, vec![0x12], vec![0x55]),
//! ]);
//!
//! let mut mcp = mcp23017_driver::Mcp23017::new(i2c.clone());
//! assert_eq!(mcp.get_port(0x20, 0).unwrap(), 0x55);
//!
//! i2c.done();
//! ```

mod bus;
mod driver;
mod error;

pub use bus::I2cBus;
pub use driver::{Mcp23017, Mode, Register};
pub use error::Error;

pub(crate) use bus::I2cExt;
