//! Scene-side collaborators of the manipulator core
//!
//! Entities and their transform components are owned by the host scene;
//! manipulators only hold non-owning handles into it.

pub mod entity;
