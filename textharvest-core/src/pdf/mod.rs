//! PDF parsing
//!
//! Pluggable backends behind the `PdfBackend` trait. Which backends exist is
//! decided at compile time through cargo features; a build with none of them
//! still links, but every run reports the capability as unavailable.

pub mod backends;

use crate::error::Result;

pub use backends::{PdfBackend, PdfPages};

#[cfg(feature = "lopdf-backend")]
pub use backends::LopdfBackend;

/// Backend enum for runtime backend selection
pub enum PdfBackendImpl {
    #[cfg(feature = "lopdf-backend")]
    Lopdf(LopdfBackend),
}

impl PdfBackendImpl {
    /// Pick the first backend compiled into this build.
    pub fn detect() -> Result<Self> {
        #[cfg(feature = "lopdf-backend")]
        {
            Ok(PdfBackendImpl::Lopdf(LopdfBackend::new()))
        }

        #[cfg(not(feature = "lopdf-backend"))]
        {
            Err(crate::error::ExtractError::BackendUnavailable(
                "no PDF backend compiled in (build with --features lopdf-backend)".to_string(),
            ))
        }
    }
}

impl PdfBackend for PdfBackendImpl {
    #[cfg_attr(not(feature = "lopdf-backend"), allow(unused_variables))]
    fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PdfPages>> {
        match *self {
            #[cfg(feature = "lopdf-backend")]
            PdfBackendImpl::Lopdf(ref backend) => backend.open(pdf_bytes),
        }
    }

    fn name(&self) -> &str {
        match *self {
            #[cfg(feature = "lopdf-backend")]
            PdfBackendImpl::Lopdf(ref backend) => backend.name(),
        }
    }

    fn is_healthy(&self) -> bool {
        match *self {
            #[cfg(feature = "lopdf-backend")]
            PdfBackendImpl::Lopdf(ref backend) => backend.is_healthy(),
        }
    }
}
