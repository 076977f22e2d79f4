//! Domgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Domgen
//! component generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           domgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     domgen-adapters (Infrastructure)    │
//! │ (DirectoryTemplateStore, LocalFs, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (PackageLocation, DomainName, Kinds)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domgen_core::{
//!     application::GenerateService,
//!     domain::{DomainName, GenerationRequest, SourceRootMarker},
//! };
//!
//! # fn run(service: GenerateService) -> domgen_core::error::DomgenResult<()> {
//! let request = GenerationRequest::new(
//!     "/work/shop/src/main/java/com/example/demo",
//!     DomainName::parse("product")?,
//!     SourceRootMarker::default(),
//! );
//! let report = service.generate(&request)?;
//! println!("{} files written", report.written_count());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ComponentKind, DomainName, GenerationPlan, GenerationReport, GenerationRequest,
        PackageLocation, SourceRootMarker, TemplateVariables,
    };
    pub use crate::error::{DomgenError, DomgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
