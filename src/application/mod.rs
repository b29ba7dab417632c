//! Application Layer
//!
//! Use cases that orchestrate the asset flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain and the assets)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Loads inputs, resolves the network manifest and the base image
//! - `InspectUseCase` - Read-only queries over a persisted network manifest
//! - `AssetFactory` - Builds assets backed by the system tools

mod factory;
pub mod generate;
pub mod inspect;

pub use factory::AssetFactory;
pub use generate::{load_inputs, load_or_generate, GenerateResult, GenerateUseCase};
pub use inspect::InspectUseCase;
