/*!
    resolve a fired command to a built-in action or to the command backend
*/

use bilge::prelude::*;
use log::*;
use crate::{
    interface::{command, status, error},
    processor::CommandProcessor,
    registers::StatusRegister,
    Error,
    };


/**
    execute a command and return the status to report

    - [command::NOP] does nothing
    - [command::PING] answers without involving the backend
    - [command::REBOOT] restarts the backend, failing to do so is [Error::Fatal]
    - anything else is forwarded to the backend, whose failures are reported as an internal error status
*/
pub fn dispatch<P: CommandProcessor + ?Sized>(processor: &mut P, command: u8, parameter: u23) -> Result<StatusRegister, Error> {
    match command {
        command::NOP => Ok(StatusRegister::reply(error::UNDEFINED, u22::new(status::UNDEFINED))),
        command::PING => Ok(StatusRegister::reply(error::UNDEFINED, u22::new(status::PING_REPLY))),
        command::REBOOT => reboot(processor),
        _ => Ok(forward(processor, command, parameter)),
    }
}

fn reboot<P: CommandProcessor + ?Sized>(processor: &mut P) -> Result<StatusRegister, Error> {
    info!("rebooting command backend");
    processor.shutdown();
    match processor.initialize() {
        Ok(()) => Ok(StatusRegister::reply(error::UNDEFINED, u22::new(status::BOOTING))),
        Err(err) => {
            error!("command backend failed to initialize during reboot: {}", err);
            Err(Error::Fatal)
        },
    }
}

fn forward<P: CommandProcessor + ?Sized>(processor: &mut P, command: u8, parameter: u23) -> StatusRegister {
    if !processor.is_initialized() {
        error!("command {:#04x} received while backend is not initialized", command);
        return StatusRegister::internal_error();
    }
    let reply = match processor.execute(command, parameter) {
        Ok(reply) => reply,
        Err(err) => {
            error!("command backend failed on command {:#04x}: {}", command, err);
            return StatusRegister::internal_error();
        },
    };
    let Ok(status) = u22::try_new(reply.status) else {
        error!("command backend returned status {:#x} out of range for command {:#04x}", reply.status, command);
        return StatusRegister::internal_error();
    };
    debug!("command {:#04x} returned error {:#04x} status {:#x}", command, reply.error, reply.status);
    StatusRegister::reply(reply.error, status)
}
