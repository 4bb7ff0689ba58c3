/// Start-up sequencing
pub mod init;

pub use init::init_engine;
