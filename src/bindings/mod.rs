pub mod audio;
pub mod avatar;
pub mod characters;
pub mod core;
pub mod gallery;

pub use audio::*;
pub use avatar::*;
pub use characters::*;
pub use self::core::*;
pub use gallery::*;
