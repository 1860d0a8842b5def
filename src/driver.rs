//! Driver core for the `MCP23017`.
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/devicedoc/20001952c.pdf
//!
//! The chip exposes each register once per port, at `base + port` (port 0 is
//! "A", port 1 is "B").  All operations here take the device address, port
//! and (where applicable) bit explicitly, validate them before touching the
//! bus, and re-read the device on every call.
use core::fmt;

use crate::{Error, I2cBus, I2cExt};

const ADDR_MIN: u8 = 0x20;
const ADDR_MAX: u8 = 0x27;

fn check_address<E>(address: u8) -> Result<(), Error<E>> {
    if (ADDR_MIN..=ADDR_MAX).contains(&address) {
        Ok(())
    } else {
        Err(Error::InvalidAddress(address))
    }
}

fn check_port<E>(port: u8) -> Result<(), Error<E>> {
    if port <= 1 {
        Ok(())
    } else {
        Err(Error::InvalidPort(port))
    }
}

fn check_bit<E>(bit: u8) -> Result<(), Error<E>> {
    if bit <= 7 {
        Ok(())
    } else {
        Err(Error::InvalidBit(bit))
    }
}

/// Register base addresses, valid for BANK=0 (the reset state of the chip,
/// which this driver does not change).
///
/// Each register exists once per port; the port-1 ("B") copy lives at
/// `base + 1`.  Reset value is 0x00 for everything except IODIR, which
/// resets to 0xFF (all pins inputs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// IODIR: input/output direction: 0=output; 1=input
    Iodir = 0x00,
    /// IPOL: input polarity: 0=register values match input pins; 1=opposite
    Ipol = 0x02,
    /// GPINTEN: interrupt-on-change: 0=disable; 1=enable
    Gpinten = 0x04,
    /// DEFVAL: default values for interrupt-on-change
    Defval = 0x06,
    /// INTCON: interrupt-on-change config: 0=compare to previous pin value;
    ///   1=compare to corresponding bit in DEFVAL
    Intcon = 0x08,
    /// IOCON: configuration register (BANK, MIRROR, SEQOP, DISSLW, ...)
    Iocon = 0x0a,
    /// GPPU: enables weak internal pull-ups on each pin (when configured as
    ///   an input)
    Gppu = 0x0c,
    /// INTF: interrupt flags: 1=corresponding pin caused interrupt
    Intf = 0x0e,
    /// INTCAP: value of each pin at the time it caused an interrupt
    Intcap = 0x10,
    /// GPIO: reflects logic level on pins
    Gpio = 0x12,
    /// OLAT: output latches: sets state for pins configured as outputs
    Olat = 0x14,
}

impl Register {
    /// Effective address of this register for the given port.
    fn for_port(self, port: u8) -> u8 {
        self as u8 + port
    }
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}

/// Requested configuration for a single I/O line.
///
/// Not stored anywhere; [`Mcp23017::set_mode`] translates it into updates of
/// up to three registers (IODIR, GPPU, IPOL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Line drives its output latch value.
    Output,
    /// High-impedance input.
    Input,
    /// Input with the internal pull-up enabled.
    InputPullup,
    /// Input whose read value is logically inverted.
    InputInverted,
    /// Input with pull-up enabled and inverted read value.
    InputPullupInverted,
}

/// Name and base address of every register, in dump order.
const DUMP_REGS: [(&str, Register); 11] = [
    ("IODIR", Register::Iodir),
    ("IPOL", Register::Ipol),
    ("GPINTEN", Register::Gpinten),
    ("DEFVAL", Register::Defval),
    ("INTCON", Register::Intcon),
    ("IOCON", Register::Iocon),
    ("GPPU", Register::Gppu),
    ("INTF", Register::Intf),
    ("INTCAP", Register::Intcap),
    ("GPIO", Register::Gpio),
    ("OLAT", Register::Olat),
];

/// Driver handle for MCP23017 chips on one I2C bus.
///
/// Owns the bus handle and nothing else; chips are addressed per call, so a
/// single handle serves every MCP23017 on the bus.
pub struct Mcp23017<I2C> {
    i2c: I2C,
}

impl<I2C: I2cBus> Mcp23017<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Destroy the driver and release the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Returns `true` if a device is readable at this address.
    pub fn exists(&mut self, address: u8) -> bool {
        self.read_register(address, 0, Register::Iocon).is_ok()
    }

    /// Read a register of the given port.
    ///
    /// Escape hatch for registers the higher-level operations do not cover;
    /// see the datasheet for register details.
    pub fn read_register(
        &mut self,
        address: u8,
        port: u8,
        reg: Register,
    ) -> Result<u8, Error<I2C::BusError>> {
        check_address(address)?;
        check_port(port)?;
        self.i2c
            .read_reg(address, reg.for_port(port))
            .map_err(Error::Bus)
    }

    /// Write a register of the given port.
    ///
    /// Escape hatch, like [`Mcp23017::read_register`].
    pub fn write_register(
        &mut self,
        address: u8,
        port: u8,
        reg: Register,
        value: u8,
    ) -> Result<(), Error<I2C::BusError>> {
        check_address(address)?;
        check_port(port)?;
        self.i2c
            .write_reg(address, reg.for_port(port), value)
            .map_err(Error::Bus)
    }

    /// Configure the mode of a single I/O line.
    ///
    /// Reads the registers a mode touches, applies the change for this bit
    /// only and writes back, so the other lines of the port are not
    /// disturbed.  A failed read aborts the operation before any register is
    /// written.  The direction register is only written if it actually
    /// changed.
    pub fn set_mode(
        &mut self,
        address: u8,
        port: u8,
        bit: u8,
        mode: Mode,
    ) -> Result<(), Error<I2C::BusError>> {
        check_address(address)?;
        check_port(port)?;
        check_bit(bit)?;

        let dir = self.read_register(address, port, Register::Iodir)?;
        let mut new_dir = dir;
        let mut pullup = None;
        let mut polarity = None;

        match mode {
            Mode::Output => new_dir &= !(1 << bit),
            Mode::Input => new_dir |= 1 << bit,
            Mode::InputPullup => {
                new_dir |= 1 << bit;
                pullup = Some(self.read_register(address, port, Register::Gppu)? | 1 << bit);
            }
            Mode::InputInverted => {
                new_dir |= 1 << bit;
                polarity = Some(self.read_register(address, port, Register::Ipol)? | 1 << bit);
            }
            Mode::InputPullupInverted => {
                new_dir |= 1 << bit;
                pullup = Some(self.read_register(address, port, Register::Gppu)? | 1 << bit);
                polarity = Some(self.read_register(address, port, Register::Ipol)? | 1 << bit);
            }
        }

        if new_dir != dir {
            self.write_register(address, port, Register::Iodir, new_dir)?;
        }
        if let Some(value) = pullup {
            self.write_register(address, port, Register::Gppu, value)?;
        }
        if let Some(value) = polarity {
            self.write_register(address, port, Register::Ipol, value)?;
        }
        Ok(())
    }

    /// Read the raw 8-bit GPIO value of a port.
    pub fn get_port(&mut self, address: u8, port: u8) -> Result<u8, Error<I2C::BusError>> {
        self.read_register(address, port, Register::Gpio)
    }

    /// Read the value of a single GPIO line.
    pub fn get_bit(&mut self, address: u8, port: u8, bit: u8) -> Result<bool, Error<I2C::BusError>> {
        check_bit(bit)?;
        Ok(self.read_register(address, port, Register::Gpio)? & 1 << bit != 0)
    }

    /// Write all 8 GPIO lines of a port at once.
    pub fn set_port(
        &mut self,
        address: u8,
        port: u8,
        value: u8,
    ) -> Result<(), Error<I2C::BusError>> {
        self.write_register(address, port, Register::Gpio, value)
    }

    /// Set a single GPIO line, leaving the other lines of the port untouched.
    ///
    /// Read-modify-write; the write is skipped when the port already holds
    /// the requested value.
    pub fn set_bit(
        &mut self,
        address: u8,
        port: u8,
        bit: u8,
        value: bool,
    ) -> Result<(), Error<I2C::BusError>> {
        check_bit(bit)?;

        let current = self.read_register(address, port, Register::Gpio)?;
        let new = if value {
            current | 1 << bit
        } else {
            current & !(1 << bit)
        };
        if new != current {
            self.write_register(address, port, Register::Gpio, new)?;
        }
        Ok(())
    }

    /// Print the current register state of a device to the given sink.
    ///
    /// All 22 registers are read before anything beyond the header is
    /// printed; if any read fails, a one-line notice is written instead of
    /// partial data.  Bus errors are not returned, only sink errors are.
    pub fn dump<W: fmt::Write>(&mut self, sink: &mut W, address: u8) -> fmt::Result {
        writeln!(sink, "MCP23017 address 0x{:02x}", address)?;

        let mut values = [(0u8, 0u8); DUMP_REGS.len()];
        for (slot, (_, reg)) in values.iter_mut().zip(DUMP_REGS.iter().copied()) {
            let a = self.read_register(address, 0, reg);
            let b = self.read_register(address, 1, reg);
            match (a, b) {
                (Ok(a), Ok(b)) => *slot = (a, b),
                _ => {
                    writeln!(sink, "error reading register 0x{:02x}", u8::from(reg))?;
                    return Ok(());
                }
            }
        }

        for ((name, reg), (a, b)) in DUMP_REGS.iter().copied().zip(values.iter().copied()) {
            writeln!(sink, "{}A 0x{:02x} {:08b}", name, reg.for_port(0), a)?;
            writeln!(sink, "{}B 0x{:02x} {:08b}", name, reg.for_port(1), b)?;
        }
        Ok(())
    }
}
