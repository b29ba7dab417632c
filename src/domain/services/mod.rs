//! Domain Services
//!
//! Pure logic over domain entities, no I/O.

pub mod multidoc;
pub mod node_zero;

pub use multidoc::{decode_documents, DecodeError, DocumentDecoder, DocumentStream, TypedDecoder};
pub use node_zero::{node_zero_ip, NodeZeroError};
