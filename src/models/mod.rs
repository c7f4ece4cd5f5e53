//! Request-scoped data models

pub mod order;
pub mod signal;

pub use order::{AttachAlgoOrder, OrderRequest};
pub use signal::{PositionSide, ScalarInput, Side, Signal, ValidSignal};
