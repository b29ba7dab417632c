//! Domain Layer
//!
//! Entities, ports and pure services of the asset generator, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (AssetFile, NetworkRecord, AgentConfigSpec)
//! - `value_objects/` - Immutable value types (FieldErrors, ConfigWarning)
//! - `services/` - Multi-document decoding, node-zero IP selection
//! - `ports/` - Interface definitions for assets and infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
