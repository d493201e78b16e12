//! Infrastructure layer: concrete registry, transport and wire DTOs.

pub mod dto;
pub mod outbound;
pub mod registry;
