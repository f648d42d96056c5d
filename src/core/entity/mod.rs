//! Entity handles and components manipulated by tools
//!
//! Entities live in an arena-style [`World`]; tools reference them through
//! copyable [`Entity`] handles and never own their lifetime. A handle whose
//! entity was deleted is detectable via [`World::contains`].

pub mod components;
pub mod world;

// Re-export commonly used types
pub use components::{GlobalTransform, Name, Transform};
pub use world::World;

// Re-export hecs types that users will need
pub use hecs::Entity;
