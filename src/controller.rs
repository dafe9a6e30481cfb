/*!
    controller side of the command register

    [Controller] produces the command register sequence expected by the device: the execute bit is held for some cycles with the command, then released once to fire it.
*/

use bilge::prelude::*;
use crate::{
    registers::{self, CommandRegister, StatusRegister, REGISTER_SIZE},
    Error,
    };


/// command sequencer, to be polled once per cycle
#[derive(Clone, Debug)]
pub struct Controller {
    /// number of cycles the execute bit is held
    hold: u8,
    request: CommandRegister,
    state: State,
}
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Asserting {remaining: u8},
    Releasing,
}

impl Controller {
    /// `hold` is the number of cycles with the execute bit set, at least one is always sent
    pub fn new(hold: u8) -> Self {
        Self {
            hold: hold.max(1),
            request: CommandRegister::default(),
            state: State::Idle,
        }
    }
    /// true when the previous command has been released and a new one can be submitted
    pub fn is_idle(&self) -> bool {self.state == State::Idle}

    /// queue a command, refused if the previous one is still being sent
    pub fn submit(&mut self, command: u8, parameter: u23) -> bool {
        if !self.is_idle()
            {return false}
        self.request = CommandRegister::new(parameter, command, true);
        self.state = State::Asserting {remaining: self.hold};
        true
    }

    /// command register to send in this cycle
    pub fn output(&mut self) -> [u8; REGISTER_SIZE] {
        let mut register = self.request;
        match self.state {
            State::Asserting {remaining} => {
                register.set_execute(true);
                self.state = if remaining > 1
                    {State::Asserting {remaining: remaining - 1}}
                    else {State::Releasing};
            },
            State::Releasing => {
                register.set_execute(false);
                self.state = State::Idle;
            },
            State::Idle => {
                register.set_execute(false);
            },
        }
        registers::encode_command(register)
    }

    /// decode the status register received in this cycle
    pub fn observe(&self, input: &[u8]) -> Result<StatusRegister, Error> {
        registers::decode_status(input)
    }
}
