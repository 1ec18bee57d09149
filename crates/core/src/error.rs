use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: the name may not be empty.")]
    EmptyParameterName,

    #[error("The default value for the `--{}` parameter must match its declared kind.", .0)]
    DefaultKindMismatch(String),

    #[error("Invalid command: the name may not be empty.")]
    EmptyCommandName,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Misc error: {}", .0)]
    Misc(String),
}
