#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Client(#[from] pwned_client::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No password given. Pass one as an argument or use --stdin.")]
    MissingPassword,

    #[error("Cannot read the password from --stdin and an argument together")]
    InvalidArgs,
}
