pub mod process_event;
pub mod schedule_delivery;
