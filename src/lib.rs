#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod error;
pub mod export;
pub mod field;
pub mod pegs;
pub mod sequencer;
pub mod types;
pub mod worker;

// Supporting modules used by the command-line tool.
pub mod config;
pub mod diagnostics;
pub mod estimate;
pub mod image;
pub mod raster;
pub mod render;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::export::{export_connections, ExportFormat};
pub use crate::field::DarknessField;
pub use crate::pegs::{compute_pegs, Peg};
pub use crate::sequencer::{generate, Progress, ProgressSink, Sequencer, StringArtParams};
pub use crate::types::StringArtResult;
pub use crate::worker::{GenerationHandle, WorkerMessage};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use string_art::prelude::*;
///
/// # fn main() -> Result<(), string_art::Error> {
/// let size = 200usize;
/// let gray = vec![128u8; size * size];
/// let image = ImageU8::from_slice(size, size, &gray)?;
/// let field = DarknessField::from_luminance(&image, false);
///
/// let params = StringArtParams {
///     frame_size: size as f64,
///     ..Default::default()
/// };
/// let result = generate(field, params, &mut NoProgress)?;
/// println!("{}", export_connections(&result.connections, ExportFormat::Csv));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::sequencer::NoProgress;
    pub use crate::{
        export_connections, generate, DarknessField, ExportFormat, StringArtParams,
        StringArtResult,
    };
}
