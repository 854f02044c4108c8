pub mod color;
pub mod generate;
pub mod path;

/// Command outcome: serializable payload plus process exit code.
pub type CmdResult<T> = pulseviz::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}
