pub mod number_utils;

pub use number_utils::{
    format_cents, format_grouped, format_percent, format_whole, parse_loose, round_cents,
    round_whole,
};
