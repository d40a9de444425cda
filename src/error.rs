use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrillError>;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("surface error: {0}")]
    Surface(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("I/O error {0}")]
    Io(#[from] std::io::Error),

    #[error("event loop error {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window error {0}")]
    Os(#[from] winit::error::OsError),

    #[error("pixels error {0}")]
    Pixels(#[from] pixels::Error),
}

pub fn surface_failed(msg: impl ToString) -> DrillError {
    DrillError::Surface(msg.to_string())
}
