//! Built-in heuristic rules.

pub mod embedded_space;
pub mod empty_value;
pub mod weak_secret;

pub use embedded_space::EmbeddedSpaceRule;
pub use empty_value::EmptyValueRule;
pub use weak_secret::WeakSecretRule;
