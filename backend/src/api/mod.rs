pub mod ads;
pub mod analytics;
pub mod env;
pub mod ipfs;
pub mod payments;
pub mod upload;
pub mod video;

pub use ads::*;
pub use analytics::*;
pub use env::*;
pub use ipfs::*;
pub use payments::*;
pub use upload::*;
pub use video::*;
