pub mod events;
pub mod pii;

pub use pii::Redacted;
