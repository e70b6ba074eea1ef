pub mod error;
pub mod normalize;
pub mod receipt;
pub mod scoring;
pub mod validation;
pub mod wire;

pub use error::{Error, FieldErrors, Result};
pub use normalize::ReceiptNormalizer;
pub use receipt::{Item, Receipt};
pub use scoring::{score, PointsBreakdown};
pub use validation::ReceiptValidator;
pub use wire::{ItemWire, ReceiptWire};
