/*!
    signal channel: scales the values written by the controller with the gain parameter and reports them back
*/

use packbytes::{FromBytes, ToBytes, ByteArray};
use log::*;
use crate::{
    interface::{SIGNAL_SUBMODULE, index},
    parameters::ParameterStore,
    utils::Hex,
    Error,
    };


/// size of the channel data in both directions
pub const SIGNAL_SIZE: usize = 8;

/// layout of the signal data on the wire, both fields are big endian
///
/// the integer comes first, unlike echo devices laying out the float first
#[derive(Copy, Clone, Default, FromBytes, ToBytes, Debug, PartialEq)]
pub struct SignalData {
    pub integer: u32,
    /// bit pattern of an IEEE-754 single precision float
    pub float: u32,
}
impl SignalData {
    pub fn new(integer: u32, float: f32) -> Self {
        Self {integer, float: float.to_bits()}
    }
    pub fn float(&self) -> f32 {
        f32::from_bits(self.float)
    }
    pub fn from_wire(bytes: &[u8]) -> Result<Self, Error> {
        let mut dst = <Self as FromBytes>::Bytes::zeroed();
        if bytes.len() != <Self as FromBytes>::Bytes::SIZE
            {return Err(Error::InvalidLength)}
        dst.as_mut().copy_from_slice(bytes);
        Ok(Self::from_be_bytes(dst))
    }
    pub fn to_wire(self) -> [u8; SIGNAL_SIZE] {
        let mut dst = [0; SIGNAL_SIZE];
        dst.copy_from_slice(self.to_be_bytes().as_ref());
        dst
    }
}

/// data buffers of the signal channel, in wire format
#[derive(Clone, Debug, Default)]
pub struct SignalChannel {
    /// last data received from the controller
    output: [u8; SIGNAL_SIZE],
    /// last data computed for the controller
    input: [u8; SIGNAL_SIZE],
}
impl SignalChannel {
    pub fn new() -> Self {Self::default()}

    /// store new data from the controller, as is
    pub fn set_output(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.len() != SIGNAL_SIZE
            {return Err(Error::InvalidLength)}
        self.output.copy_from_slice(data);
        Ok(())
    }
    pub fn output(&self) -> &[u8; SIGNAL_SIZE] {&self.output}
    pub fn reset_output(&mut self) {
        self.output = [0; SIGNAL_SIZE];
    }

    /**
        compute the data for the controller: both output fields multiplied by the gain parameter

        the gain is an integer scalar, it also multiplies the float field. Integer multiplication wraps around.
    */
    pub fn compute_input(&mut self, parameters: &ParameterStore) -> Result<&[u8; SIGNAL_SIZE], Error> {
        let gain = gain(parameters)?;
        let output = SignalData::from_wire(&self.output)?;
        let input = SignalData::new(
            output.integer.wrapping_mul(gain),
            output.float() * gain as f32,
            );
        self.input = input.to_wire();
        trace!("signal gain {}  output {}  input {}", gain, Hex(&self.output), Hex(&self.input));
        Ok(&self.input)
    }
}

/// current gain parameter, as a big endian integer
pub fn gain(parameters: &ParameterStore) -> Result<u32, Error> {
    let raw = parameters.value(SIGNAL_SUBMODULE, index::GAIN)
        .ok_or(Error::UnknownParameter)?;
    let raw = <[u8; 4]>::try_from(raw).map_err(|_| Error::LengthMismatch)?;
    Ok(u32::from_be_bytes(raw))
}
