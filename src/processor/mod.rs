/*!
    backends executing the commands the device doesn't handle itself

    The device only knows the [CommandProcessor] capability, two implementations are provided:

    - [HandlerTable] calls plain functions registered per command code, in the device process
    - [ScriptProcessor] (feature `script`) forwards commands to a child process through a line protocol
*/

/// commands resolved by functions in the device process
mod table;
/// commands resolved by an external program
#[cfg(feature = "script")]
mod script;

pub use table::*;
#[cfg(feature = "script")]
pub use script::*;


use bilge::prelude::*;
use thiserror::Error;

/// error and status codes returned by a backend for one command
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// error code, see [crate::interface::error]
    pub error: u8,
    /// additional status code, see [crate::interface::status]. It must fit in 22 bits to be reported
    pub status: u32,
}
impl Reply {
    pub const fn new(error: u8, status: u32) -> Self {
        Self {error, status}
    }
}

/// error regarding the command backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("backend is not initialized")]
    NotInitialized,
    #[error("backend reply is not an (error, status) couple of integers in range")]
    MalformedReply,
    #[error("backend failed to initialize")]
    Init,
    #[cfg(feature = "std")]
    #[error("communication with backend failed")]
    Io(#[from] std::io::Error),
}

/**
    capability of executing domain specific commands

    calls are synchronous and made from the cycle processing, a slow backend extends the cycle.
*/
pub trait CommandProcessor {
    /// start the backend, also called after [Self::shutdown] to restart it
    fn initialize(&mut self) -> Result<(), BackendError>;
    /// stop the backend, does nothing if it is already stopped
    fn shutdown(&mut self);
    /// true between successful [Self::initialize] and [Self::shutdown]
    fn is_initialized(&self) -> bool;
    /// execute one command, the returned codes are reported to the controller without interpretation
    fn execute(&mut self, command: u8, parameter: u23) -> Result<Reply, BackendError>;
}
