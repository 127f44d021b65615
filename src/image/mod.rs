pub mod io;
pub mod luminance;
pub mod traits;
pub mod u8;

pub use self::luminance::{luminance_from_rgba, LUMA_WEIGHTS};
pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;
