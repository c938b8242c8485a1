#[macro_use]
extern crate tracing;

mod client;
mod destination;
mod error;
pub mod resources;
mod source;
mod table;
mod util;

pub use client::{BigQueryClient, PROJECT_ID_ENV_VARS};
pub use destination::Destination;
pub use error::{DispositionKind, Error};
pub use resources::job::load::{CreateDisposition, WriteDisposition};
pub use source::{GcsReference, Source};
pub use table::Table;

/// Type alias to [`core::result::Result<T, Error>`].
pub type Result<T> = core::result::Result<T, Error>;

mod private {
    /// Sealed trait for use throughout the crate
    pub trait Sealed {}

    impl<T: Sealed + ?Sized> Sealed for &T {}
}
