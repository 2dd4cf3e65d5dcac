//! Domain types for the LightBnB data-access layer.
//!
//! This module provides:
//! - Typed keys (UserId, PropertyId, ReservationId) and the Limit bound
//! - Integer money handling via Cents
//! - User, Property and Reservation rows plus their joined listing forms

pub mod money;
pub mod primitives;
pub mod property;
pub mod reservation;
pub mod user;

pub use money::Cents;
pub use primitives::{Limit, PropertyId, ReservationId, UserId};
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::{Reservation, ReservationListing};
pub use user::{NewUser, User};
