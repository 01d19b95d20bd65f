pub mod delivery;
pub mod profile;

pub use delivery::ScheduledDelivery;
pub use profile::UserProfile;
