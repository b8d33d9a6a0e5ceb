mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, format_clock_time, format_full_time, parse_timestamp,
};
