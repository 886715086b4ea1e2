pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use name::Name;
pub use phone::{digits_only, Phone, PHONE_DIGITS};
pub use record::Record;
