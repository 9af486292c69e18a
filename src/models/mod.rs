pub mod credentials;
pub mod loaders;
pub mod posting;
pub mod region;
pub mod requisition;

pub use credentials::Credentials;
pub use loaders::{load_region_directory, BuiltinRegions, RegionSource, TomlRegionFile};
pub use posting::{ExistingState, PostingRow, PostingStatus};
pub use region::{Region, RegionDirectory};
pub use requisition::Requisition;
