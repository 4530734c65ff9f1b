pub mod record;
pub mod resume;
pub mod settings;

pub use record::{NewResumeRecord, StoredResumeRecord};
pub use resume::Resume;
pub use settings::RenderSettings;
