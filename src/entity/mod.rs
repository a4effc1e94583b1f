//! Per-character state: bodies, their parts and the wounds on them

pub mod body;
pub mod wounds;

pub use body::{Body, BodyPart, Identity};
pub use wounds::{Wound, WoundLedger};
