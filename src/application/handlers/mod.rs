pub mod notification_dispatcher;
