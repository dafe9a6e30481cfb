/*!
    define the cyclic command and status registers

    both are 32 bit words sent big endian on the wire. Any bit pattern is a valid register at this level, checking the meaning of its fields is left to the state machine and the dispatcher.

    bitfields are declared from least to most significant bit.
*/

use packbytes::FromBytes;
use bilge::prelude::*;
use crate::{
    pack_bilge,
    interface::{status, error},
    Error,
    };


/// size of both registers on the wire
pub const REGISTER_SIZE: usize = 4;

/**
    register written by the controller on every cycle

    ```text
    | 31      | 30 .. 23 | 22 .. 0   |
    | execute | command  | parameter |
    ```
*/
#[bitsize(32)]
#[derive(Copy, Clone, FromBits, DebugBits, PartialEq, Default)]
pub struct CommandRegister {
    /// argument of the command
    pub parameter: u23,
    /// command code, see [crate::interface::command]
    pub command: u8,
    /// a command is pending as long as this bit is set, it is executed when released
    pub execute: bool,
}
pack_bilge!(CommandRegister);

/**
    register reported by the device on every cycle

    ```text
    | 31          | 30   | 29 .. 22 | 21 .. 0           |
    | operational | busy | error    | additional status |
    ```
*/
#[bitsize(32)]
#[derive(Copy, Clone, FromBits, DebugBits, PartialEq, Default)]
pub struct StatusRegister {
    /// device state code, see [crate::interface::status]
    pub additional_status: u22,
    /// error code, see [crate::interface::error]
    pub error: u8,
    /// a command is currently pending
    pub busy: bool,
    /// the device is able to process commands
    pub operational: bool,
}
pack_bilge!(StatusRegister);

impl CommandRegister {
    /// raw register value, in host order
    pub fn raw(self) -> u32 {self.value}
}

impl StatusRegister {
    /// raw register value, in host order
    pub fn raw(self) -> u32 {self.value}

    /// nothing pending, ready to receive a command
    pub fn ready() -> Self {
        Self::new(u22::new(status::READY), error::UNDEFINED, false, true)
    }
    /// a command is latched and waits for the execute bit to be released
    pub fn pending() -> Self {
        Self::new(u22::new(status::BUSY), error::UNDEFINED, true, true)
    }
    /// result of an executed command
    pub fn reply(error: u8, status: u22) -> Self {
        Self::new(status, error, false, true)
    }
    /// the command could not be processed because of a device-side failure
    pub fn internal_error() -> Self {
        Self::reply(error::INTERNAL, u22::new(status::ERROR))
    }
}

/// decode a command register received from the wire
pub fn decode_command(bytes: &[u8]) -> Result<CommandRegister, Error> {
    Ok(CommandRegister::from_be_bytes(wire(bytes)?))
}
/// encode a command register for the wire
pub fn encode_command(register: CommandRegister) -> [u8; REGISTER_SIZE] {
    register.raw().to_be_bytes()
}
/// decode a status register received from the wire
pub fn decode_status(bytes: &[u8]) -> Result<StatusRegister, Error> {
    Ok(StatusRegister::from_be_bytes(wire(bytes)?))
}
/// encode a status register for the wire
pub fn encode_status(register: StatusRegister) -> [u8; REGISTER_SIZE] {
    register.raw().to_be_bytes()
}

fn wire(bytes: &[u8]) -> Result<[u8; REGISTER_SIZE], Error> {
    bytes.try_into().map_err(|_| Error::InvalidLength)
}
