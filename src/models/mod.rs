pub mod batch;
pub mod composition;
pub mod encounter;
pub mod loaders;

pub use batch::{BatchJob, LogTarget};
pub use composition::{Composition, RAID_SIZE};
pub use encounter::EncounterFilter;
pub use loaders::load_batch_job;
