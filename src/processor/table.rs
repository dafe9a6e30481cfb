use bilge::prelude::*;
use log::*;
use crate::interface::{error, status};
use super::{CommandProcessor, BackendError, Reply};


/// function executing one command with the table's context
pub type Handler<C> = fn(&mut C, u23) -> Reply;

/**
    in-process backend calling a function per command code

    the context `C` is reset to its default value on every initialization, so a reboot command starts from a clean state. Codes without handler are answered with [error::INVALID_COMMAND].
*/
pub struct HandlerTable<C, const N: usize> {
    handlers: heapless::Vec<(u8, Handler<C>), N>,
    context: C,
    initialized: bool,
}
impl<C: Default, const N: usize> HandlerTable<C, N> {
    pub fn new() -> Self {
        Self {
            handlers: heapless::Vec::new(),
            context: C::default(),
            initialized: false,
        }
    }
    /// set the handler of a command code, replacing any previous one
    pub fn register(&mut self, command: u8, handler: Handler<C>) -> Result<(), &'static str> {
        if let Some(item) = self.handlers.iter_mut().find(|(code, _)| *code == command) {
            item.1 = handler;
            return Ok(());
        }
        self.handlers.push((command, handler))
            .map_err(|_| "too many handlers for table")
    }
    /// builder style [Self::register]
    pub fn with(mut self, command: u8, handler: Handler<C>) -> Result<Self, &'static str> {
        self.register(command, handler)?;
        Ok(self)
    }
    pub fn context(&self) -> &C {&self.context}
    pub fn context_mut(&mut self) -> &mut C {&mut self.context}
}
impl<C: Default, const N: usize> Default for HandlerTable<C, N> {
    fn default() -> Self {Self::new()}
}

impl<C: Default, const N: usize> CommandProcessor for HandlerTable<C, N> {
    fn initialize(&mut self) -> Result<(), BackendError> {
        self.context = C::default();
        self.initialized = true;
        debug!("handler table initialized with {} commands", self.handlers.len());
        Ok(())
    }
    fn shutdown(&mut self) {
        self.initialized = false;
    }
    fn is_initialized(&self) -> bool {self.initialized}

    fn execute(&mut self, command: u8, parameter: u23) -> Result<Reply, BackendError> {
        if !self.initialized
            {return Err(BackendError::NotInitialized)}
        match self.handlers.iter().find(|(code, _)| *code == command) {
            Some(&(_, handler)) => Ok(handler(&mut self.context, parameter)),
            None => {
                debug!("no handler for command {:#04x}", command);
                Ok(Reply::new(error::INVALID_COMMAND, status::ERROR))
            },
        }
    }
}
