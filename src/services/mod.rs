// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod place_service;
pub mod slug;
pub mod validation;

pub use place_service::*;
