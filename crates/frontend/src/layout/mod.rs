pub mod error_toast;
pub mod shell;

pub use shell::Shell;
