#![allow(dead_code)]

use std::vec::Vec;
use bilge::prelude::*;
use cmdreg::processor::{CommandProcessor, BackendError, Reply};


/// backend recording its calls, with configurable failures
#[derive(Default)]
pub struct Recorder {
    pub initialized: bool,
    pub fail_initialize: bool,
    pub initializations: usize,
    pub shutdowns: usize,
    pub executed: Vec<(u8, u32)>,
    /// reply to every command, or a malformed reply if none
    pub reply: Option<Reply>,
}
impl Recorder {
    pub fn answering(reply: Reply) -> Self {
        Self {reply: Some(reply), .. Default::default()}
    }
    pub fn running(reply: Reply) -> Self {
        Self {initialized: true, reply: Some(reply), .. Default::default()}
    }
}
impl CommandProcessor for Recorder {
    fn initialize(&mut self) -> Result<(), BackendError> {
        self.initializations += 1;
        if self.fail_initialize
            {return Err(BackendError::Init)}
        self.initialized = true;
        Ok(())
    }
    fn shutdown(&mut self) {
        self.shutdowns += 1;
        self.initialized = false;
    }
    fn is_initialized(&self) -> bool {self.initialized}
    fn execute(&mut self, command: u8, parameter: u23) -> Result<Reply, BackendError> {
        if !self.initialized
            {return Err(BackendError::NotInitialized)}
        self.executed.push((command, parameter.value()));
        self.reply.ok_or(BackendError::MalformedReply)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
