pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod search;
pub mod store;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{
    Cents, Limit, NewProperty, NewUser, Property, PropertyId, PropertyListing, Reservation,
    ReservationId, ReservationListing, User, UserId,
};
pub use error::{StoreError, StoreResult};
pub use fixtures::Fixtures;
pub use search::PropertySearch;
pub use store::{FixtureStore, PropertyStore};
