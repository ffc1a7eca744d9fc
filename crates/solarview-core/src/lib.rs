pub mod catalog;
pub mod data;
pub mod frame;
pub mod input;
pub mod orbit;
pub mod particles;
pub mod pick;
pub mod view;

// Re-export key types at crate root for convenience
pub use catalog::SortOrder;
pub use data::{Body, SolarSystemData};
pub use frame::{DrawCmd, FrameBuffer, Rgba};
pub use input::{InputEvent, InputQueue};
pub use particles::ParticleField;
pub use pick::{hit_test, Hit};
pub use view::{SimClock, ViewEvent, ViewMode, ViewState};
