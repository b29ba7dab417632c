//! Generate use case

mod result;
mod use_case;

pub use result::GenerateResult;
pub use use_case::{load_inputs, load_or_generate, GenerateUseCase};
