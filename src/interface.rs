/*!
    codes shared with the controller
    
    they are only names for raw values: the device never rejects a code because it is missing here, unknown commands are simply forwarded to the command backend.
*/

/// submodule carrying the command register (outputs) and the status register (inputs)
pub const COMMAND_SUBMODULE: u32 = 0x0000_0132;
/// submodule carrying the signal channel
pub const SIGNAL_SUBMODULE: u32 = 0x0000_0140;

/// parameter indices, see [crate::parameters::TABLE]
pub mod index {
    pub const PARAMETER_1: u32 = 123;
    pub const PARAMETER_2: u32 = 124;
    pub const GAIN: u32 = 125;
}

/// command codes, written by the controller in the command register
pub mod command {
    pub const NOP: u8 = 0x00;
    pub const REBOOT: u8 = 0x01;
    pub const PING: u8 = 0x02;
    pub const SET_WORKPIECE_TYPE_NONE: u8 = 0x03;
    /// prefix for plowsteel article numbers
    pub const SET_WORKPIECE_TYPE_122: u8 = 0x04;
    
    pub const TAKE_PICTURE: u8 = 0x10;
    pub const SET_WORKPIECE_ORIENTATION: u8 = 0x11;
    pub const SET_WORKPIECE_SERIAL_NUMBER: u8 = 0x12;
}

/// additional status codes, reported by the device in the status register
pub mod status {
    pub const UNDEFINED: u32 = 0x00;
    pub const BOOTING: u32 = 0x01;
    pub const PING_REPLY: u32 = 0x02;
    pub const READY: u32 = 0x03;
    pub const BUSY: u32 = 0x04;
    pub const ERROR: u32 = 0x05;
    pub const WORKPIECE_OK: u32 = 0x06;
    pub const WORKPIECE_NOK: u32 = 0x07;
    pub const WORKPIECE_NONE: u32 = 0x08;
}

/// error codes, reported by the device in the status register
pub mod error {
    pub const UNDEFINED: u8 = 0x00;
    pub const INVALID_COMMAND: u8 = 0x03;
    pub const INVALID_PARAMETER: u8 = 0x04;
    pub const NO_CAMERA: u8 = 0x05;
    pub const INTERNAL: u8 = 0x06;
    pub const INVALID_WORKPIECE_SIZE: u8 = 0x07;
    pub const INVALID_WORKPIECE_COLOR: u8 = 0x08;
    pub const INVALID_WORKPIECE_SHAPE: u8 = 0x09;
    pub const INVALID_WORKPIECE_WEIGHT: u8 = 0x0A;
    pub const INVALID_WORKPIECE_TEXTURE: u8 = 0x0B;
}
