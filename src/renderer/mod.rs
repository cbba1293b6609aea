pub mod components;
pub mod renderer;
pub mod renders;
pub mod theme;
pub mod traits;

pub use components::*;
pub use renderer::*;
pub use theme::*;
pub use traits::*;
