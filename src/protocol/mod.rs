mod messages;

pub use messages::Record;
