mod contact;

pub use contact::{Contact, ContactFilter, ContactStatus, ContactWithService, NewContact};
