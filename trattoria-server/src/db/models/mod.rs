//! Data models for the document store collections.

pub mod contact_message;
pub mod dish;
pub mod reservation;

pub use contact_message::{ContactMessage, ContactMessageCreate};
pub use dish::Dish;
pub use reservation::{Reservation, ReservationCreate};
