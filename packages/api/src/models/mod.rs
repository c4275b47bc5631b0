//! Data models exchanged with the parcel API.

mod id;
mod parcel;
mod recipient;

pub use id::Id;
pub use parcel::{NewParcel, Parcel, RecipientRef};
pub use recipient::{NewRecipient, Recipient};
