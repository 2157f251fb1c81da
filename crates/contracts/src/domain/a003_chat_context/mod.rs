pub mod post;
pub mod theme;

pub use post::{Post, Team};
pub use theme::PluginTheme;
