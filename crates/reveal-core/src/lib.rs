pub mod config;
pub mod constants;
pub mod converge;
pub mod debounce;
pub mod easing;
pub mod effect;
pub mod error;
pub mod params;
pub mod section;
pub mod timeline;

pub use config::*;
pub use converge::*;
pub use debounce::*;
pub use easing::*;
pub use effect::*;
pub use error::*;
pub use params::*;
pub use section::*;
pub use timeline::*;
