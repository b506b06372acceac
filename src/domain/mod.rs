//! Domain value objects and the identifier engine.
//!
//! This module contains type-safe wrappers for Brazilian CPF and CNPJ
//! numbers and phone numbers, together with the normalization and checksum
//! primitives they are built on. Every value object is validated at
//! construction time, so an instance is always well-formed.

pub mod area_codes;
pub mod checksum;
pub mod entity_id;
pub mod format;
pub mod individual_id;
pub mod normalize;
pub mod phone;

pub use entity_id::{EntityId, EntityIdScheme};
pub use format::FormatStyle;
pub use individual_id::IndividualId;
pub use normalize::NormalizedString;
pub use phone::PhoneNumber;
