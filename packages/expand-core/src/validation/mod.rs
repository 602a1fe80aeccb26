pub mod params;
pub mod path;

pub use params::{parse_color, parse_strategy, validate_options, validate_quality};
pub use path::{default_output_path, output_format_for};
