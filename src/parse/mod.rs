pub mod list_parser;
pub mod list_serializer;

pub use list_parser::{parse_duration, parse_list, parse_time, refresh, task_from_line};
pub use list_serializer::serialize_list;
