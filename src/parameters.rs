/*!
    keyed parameter store, written and read out of band by the controller

    each parameter is identified by a submodule and an index, and declared in a static table of [ParameterDescriptor]. Values are kept exactly as received from the wire, no byte order conversion is done here.
*/

use log::*;
use crate::{
    interface::{COMMAND_SUBMODULE, SIGNAL_SUBMODULE, index},
    utils::Hex,
    Error,
    };


/// maximum number of parameters in a table
pub const MAX_PARAMETERS: usize = 32;
/// maximum byte size of one parameter
pub const MAX_PARAMETER_SIZE: usize = 64;

/// declaration of a parameter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub submodule: u32,
    pub index: u32,
    /// exact number of bytes of the value
    pub length: usize,
    /// human readable name, for logging
    pub name: &'static str,
    /// value at startup, must have `length` bytes
    pub default: &'static [u8],
}

/// parameters of this device
pub static TABLE: [ParameterDescriptor; 3] = [
    ParameterDescriptor {
        submodule: COMMAND_SUBMODULE,
        index: index::PARAMETER_1,
        length: 4,
        name: "Demo 1",
        default: &[0; 4],
    },
    ParameterDescriptor {
        submodule: COMMAND_SUBMODULE,
        index: index::PARAMETER_2,
        length: 4,
        name: "Demo 2",
        default: &[0; 4],
    },
    ParameterDescriptor {
        submodule: SIGNAL_SUBMODULE,
        index: index::GAIN,
        length: 4,
        name: "Echo gain setting",
        default: &[0, 0, 0, 1],
    },
];

type Value = heapless::Vec<u8, MAX_PARAMETER_SIZE>;

/// current values of all parameters declared in a table
pub struct ParameterStore {
    table: &'static [ParameterDescriptor],
    values: heapless::Vec<Value, MAX_PARAMETERS>,
}
impl ParameterStore {
    /**
        create a store holding the default values of the given table

        panics if the table is bigger than [MAX_PARAMETERS], or if a descriptor is inconsistent
    */
    pub fn new(table: &'static [ParameterDescriptor]) -> Self {
        assert!(table.len() <= MAX_PARAMETERS, "too many parameters for store");
        let mut values = heapless::Vec::new();
        for descriptor in table {
            assert!(descriptor.length <= MAX_PARAMETER_SIZE, "parameter is too big for store");
            assert_eq!(descriptor.default.len(), descriptor.length, "default value has not the parameter's length");
            let mut value = Value::new();
            value.extend_from_slice(descriptor.default).ok();
            values.push(value).ok();
        }
        Self {table, values}
    }
    /// the table this store follows
    pub fn table(&self) -> &'static [ParameterDescriptor] {self.table}

    /// find the descriptor of a parameter
    pub fn descriptor(&self, submodule: u32, index: u32) -> Option<&'static ParameterDescriptor> {
        self.table.iter().find(|item|  item.submodule == submodule && item.index == index)
    }
    fn slot(&self, submodule: u32, index: u32) -> Option<usize> {
        self.table.iter().position(|item|  item.submodule == submodule && item.index == index)
    }

    /// current value of a parameter, without length check nor logging
    pub fn value(&self, submodule: u32, index: u32) -> Option<&[u8]> {
        self.slot(submodule, index).map(|slot| self.values[slot].as_slice())
    }

    /// replace a parameter's value, `data` must have exactly the declared length
    pub fn write(&mut self, submodule: u32, index: u32, data: &[u8]) -> Result<(), Error> {
        let Some(slot) = self.slot(submodule, index) else {
            warn!("write request to unsupported parameter, submodule {:#x} index {}", submodule, index);
            return Err(Error::UnknownParameter);
        };
        let descriptor = &self.table[slot];
        if data.len() != descriptor.length {
            warn!("write request with unsupported length, index {} length {} expected {}",
                index, data.len(), descriptor.length);
            return Err(Error::LengthMismatch);
        }
        let mut value = Value::new();
        value.extend_from_slice(data).map_err(|_| Error::LengthMismatch)?;
        self.values[slot] = value;
        debug!("writing parameter \"{}\": {}", descriptor.name, Hex(data));
        Ok(())
    }
    /// current value of a parameter, refused if it doesn't fit in `max_len` bytes
    pub fn read(&self, submodule: u32, index: u32, max_len: usize) -> Result<&[u8], Error> {
        let Some(slot) = self.slot(submodule, index) else {
            warn!("read request to unsupported parameter, submodule {:#x} index {}", submodule, index);
            return Err(Error::UnknownParameter);
        };
        let descriptor = &self.table[slot];
        if max_len < descriptor.length {
            warn!("read request with unsupported length, index {} max length {} parameter length {}",
                index, max_len, descriptor.length);
            return Err(Error::BufferTooSmall);
        }
        let value = self.values[slot].as_slice();
        debug!("reading parameter \"{}\": {}", descriptor.name, Hex(value));
        Ok(value)
    }
}
impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(&TABLE)
    }
}
