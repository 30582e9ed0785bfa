use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for this crate. Hardware setup errors are fatal at
/// startup; everything after that either self-heals per tick or is reported
/// to the HTTP caller.
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` tells `derive_more` that the wrapped type does
    // not implement `core::error::Error`.
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    #[cfg(feature = "pico")]
    #[display("matrix I2C transfer failed: {_0:?}")]
    MatrixI2c(#[error(not(source))] embassy_rp::i2c::Error),

    #[display("Format error")]
    FormatError,
}

impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}

#[cfg(feature = "pico")]
impl From<embassy_rp::i2c::Error> for Error {
    fn from(err: embassy_rp::i2c::Error) -> Self {
        Self::MatrixI2c(err)
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::FormatError
    }
}
