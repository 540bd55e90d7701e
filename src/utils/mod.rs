//! Input cleaning and dialing-code parsing helpers.

pub mod clean;
pub mod dial_code;

pub use clean::{clean_phone, has_misplaced_plus};
pub use dial_code::split_dialing_codes;
