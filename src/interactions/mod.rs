pub mod custom_id;
pub mod responses;
