/*!
    edge triggered command execution

    the controller sets the execute bit along with a command and its parameter, keeps it set as long as it wants, then releases it. The command fires on the release, with the values latched during the last cycle the bit was set.
*/

use bilge::prelude::*;
use log::*;
use crate::registers::{CommandRegister, StatusRegister};


/// state between two cycles
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// no execute bit seen
    Idle,
    /// execute bit currently set, a command is latched
    Armed,
}

/// outcome of one cycle
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transition {
    /// execute bit set, the command has been latched (again)
    Armed,
    /// execute bit just released: the latched command must be dispatched now, and its result given to [ExecutionState::complete]
    Fired {command: u8, parameter: u23},
    /// nothing pending
    Idle,
}

/// execution state of the command register, owned by the device runtime
#[derive(Clone, Debug)]
pub struct ExecutionState {
    pending: bool,
    latched_command: u8,
    latched_parameter: u23,
    status: StatusRegister,
    status_is_fresh: bool,
}
impl ExecutionState {
    pub fn new() -> Self {
        Self {
            pending: false,
            latched_command: 0,
            latched_parameter: u23::new(0),
            status: StatusRegister::ready(),
            status_is_fresh: false,
        }
    }

    /// a command is latched and waits for release
    pub fn is_pending(&self) -> bool {self.pending}
    pub fn phase(&self) -> Phase {
        if self.pending {Phase::Armed} else {Phase::Idle}
    }
    /// command and parameter latched during the last cycle the execute bit was set
    pub fn latched(&self) -> (u8, u23) {
        (self.latched_command, self.latched_parameter)
    }
    /// status to report, ready if no cycle did produce one yet
    pub fn status(&self) -> StatusRegister {
        if self.status_is_fresh {self.status}
        else {StatusRegister::ready()}
    }

    /// process the command register received in this cycle
    pub fn observe(&mut self, register: CommandRegister) -> Transition {
        if register.execute() {
            if !self.pending {
                debug!("execute bit set, command {:#04x} parameter {}", register.command(), register.parameter().value());
            }
            // no debouncing, last latched values win
            self.pending = true;
            self.latched_command = register.command();
            self.latched_parameter = register.parameter();
            self.set_status(StatusRegister::pending());
            Transition::Armed
        }
        else if self.pending {
            debug!("execute bit released, firing command {:#04x} parameter {}", self.latched_command, self.latched_parameter.value());
            self.pending = false;
            Transition::Fired {
                command: self.latched_command,
                parameter: self.latched_parameter,
            }
        }
        else {
            self.set_status(StatusRegister::ready());
            Transition::Idle
        }
    }
    /// set the result of a fired command
    pub fn complete(&mut self, status: StatusRegister) {
        self.set_status(status);
    }

    fn set_status(&mut self, status: StatusRegister) {
        self.status = status;
        self.status_is_fresh = true;
    }
}
impl Default for ExecutionState {
    fn default() -> Self {Self::new()}
}
