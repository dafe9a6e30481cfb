use thiserror::Error;

/// error returned to the cycle driver, none of them leaves any state changed except [Error::Fatal]
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("wire buffer has not the expected size")]
    InvalidLength,
    #[error("no parameter is declared for this submodule and index")]
    UnknownParameter,
    #[error("parameter data has not the declared length")]
    LengthMismatch,
    #[error("destination buffer is smaller than the parameter")]
    BufferTooSmall,
    #[error("submodule or data size not supported by this device")]
    Unsupported,
    /// the command backend could not be restarted, the device must not keep running
    #[error("command backend failed to initialize, device cannot continue")]
    Fatal,
}
impl Error {
    /// true if the device must stop, see [terminate]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// stop the process after a fatal error, this is left to the caller so it can be intercepted
#[cfg(feature = "std")]
pub fn terminate(error: Error) -> ! {
    log::error!("terminating device: {}", error);
    std::process::exit(1)
}
