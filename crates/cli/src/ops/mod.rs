pub mod init;
pub mod resolve;
pub mod version;

pub use init::Init;
pub use resolve::Resolve;
pub use version::Version;
