pub mod add;
pub mod git;
pub mod init;
pub mod scan;
pub mod status;
pub mod sync;
pub mod types;

mod stow;
#[cfg(test)]
mod tests;

pub use self::types::{Entry, Only, Status};
pub use add::{AddHandler, AddOptions};
pub use git::GitHandler;
pub use init::InitHandler;
pub use scan::ScanHandler;
pub use status::StatusHandler;
pub use sync::{SyncHandler, SyncOptions};
