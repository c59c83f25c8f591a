pub mod paint;
pub mod particles;
pub mod tilt;
pub mod timeline;
pub mod wireframe;

pub use paint::*;
pub use particles::*;
pub use tilt::*;
pub use timeline::*;
pub use wireframe::*;
