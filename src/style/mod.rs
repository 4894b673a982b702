//! Style derivation: pure mapping from a card to renderable parameters.

pub mod derive;
pub mod descriptor;

pub use derive::derive_style;
pub use descriptor::StyleDescriptor;
