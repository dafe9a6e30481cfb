/*!
    device runtime, entry points of the cycle driver

    The central resource is the [Device] struct, owning all state touched by the cyclic exchange. Its methods are meant to be called from a single thread, once per cycle for the cyclic data, and whenever a configuration exchange happens for the parameters.
*/

use log::*;
use crate::{
    interface::{COMMAND_SUBMODULE, SIGNAL_SUBMODULE},
    registers::{self, CommandRegister, StatusRegister, REGISTER_SIZE},
    parameters::{self, ParameterStore, ParameterDescriptor},
    signal::SignalChannel,
    execution::{ExecutionState, Transition},
    processor::CommandProcessor,
    dispatch::dispatch,
    Error,
    };


/// field device runtime around a command backend
pub struct Device<P> {
    processor: P,
    execution: ExecutionState,
    parameters: ParameterStore,
    signal: SignalChannel,
    /// last command register received
    command: CommandRegister,
    /// status register as sent on the wire
    status: [u8; REGISTER_SIZE],
}

impl<P: CommandProcessor> Device<P> {
    /// create a device with the standard parameter table, the backend is left as is
    pub fn new(processor: P) -> Self {
        Self::with_parameters(processor, &parameters::TABLE)
    }
    /// create a device with a custom parameter table
    pub fn with_parameters(processor: P, table: &'static [ParameterDescriptor]) -> Self {
        Self {
            processor,
            execution: ExecutionState::new(),
            parameters: ParameterStore::new(table),
            signal: SignalChannel::new(),
            command: CommandRegister::default(),
            status: registers::encode_status(StatusRegister::ready()),
        }
    }
    /// create a device and initialize its backend, the device is useless if this fails
    pub fn start(mut processor: P) -> Result<Self, Error> {
        if let Err(err) = processor.initialize() {
            error!("command backend failed to initialize: {}", err);
            return Err(Error::Fatal);
        }
        info!("device started");
        Ok(Self::new(processor))
    }

    pub fn processor(&self) -> &P {&self.processor}
    pub fn processor_mut(&mut self) -> &mut P {&mut self.processor}
    pub fn execution(&self) -> &ExecutionState {&self.execution}
    pub fn parameters(&self) -> &ParameterStore {&self.parameters}
    pub fn signal(&self) -> &SignalChannel {&self.signal}
    /// status that will be reported on next input
    pub fn status(&self) -> StatusRegister {self.execution.status()}
    /// last command register received
    pub fn last_command(&self) -> CommandRegister {self.command}

    /**
        receive the data written by the controller for one submodule

        for the command submodule this runs the execution state machine and dispatches the command if it fired. [Error::Fatal] is only returned when a reboot command could not restart the backend.
    */
    pub fn consume_output(&mut self, submodule: u32, subslot: u16, data: &[u8]) -> Result<(), Error> {
        match submodule {
            COMMAND_SUBMODULE => {
                let Ok(register) = registers::decode_command(data) else {
                    warn!("command register with unsupported size {} on subslot {}", data.len(), subslot);
                    return Err(Error::Unsupported);
                };
                self.command = register;
                self.process(register)
            },
            SIGNAL_SUBMODULE => self.signal.set_output(data).map_err(|_| {
                warn!("signal data with unsupported size {} on subslot {}", data.len(), subslot);
                Error::Unsupported
            }),
            _ => {
                warn!("output data for unsupported submodule {:#x} subslot {}", submodule, subslot);
                Err(Error::Unsupported)
            },
        }
    }
    fn process(&mut self, register: CommandRegister) -> Result<(), Error> {
        match self.execution.observe(register) {
            Transition::Fired {command, parameter} => {
                let status = dispatch(&mut self.processor, command, parameter)?;
                self.execution.complete(status);
            },
            Transition::Armed | Transition::Idle => {},
        }
        Ok(())
    }

    /**
        produce the data to send to the controller for one submodule

        returns the data and whether its quality is good, or nothing if the submodule is not handled by this device
    */
    pub fn produce_input(&mut self, submodule: u32, subslot: u16) -> Option<(&[u8], bool)> {
        match submodule {
            COMMAND_SUBMODULE => {
                self.status = registers::encode_status(self.execution.status());
                Some((self.status.as_slice(), true))
            },
            SIGNAL_SUBMODULE => match self.signal.compute_input(&self.parameters) {
                Ok(input) => Some((input.as_slice(), true)),
                Err(err) => {
                    warn!("cannot compute signal input on subslot {}: {}", subslot, err);
                    None
                },
            },
            _ => {
                debug!("no input data for submodule {:#x} subslot {}", submodule, subslot);
                None
            },
        }
    }

    /// reset the controller's data after they became invalid, the execution state is left untouched
    pub fn set_default_outputs(&mut self) {
        debug!("setting default outputs");
        self.command = CommandRegister::default();
        self.signal.reset_output();
    }

    /// configuration write from the controller
    pub fn write_parameter(&mut self, submodule: u32, index: u32, data: &[u8]) -> Result<(), Error> {
        self.parameters.write(submodule, index, data)
    }
    /// configuration read from the controller, `max_len` is the room available for the value
    pub fn read_parameter(&self, submodule: u32, index: u32, max_len: usize) -> Result<&[u8], Error> {
        self.parameters.read(submodule, index, max_len)
    }
}
