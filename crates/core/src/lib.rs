pub mod error;
pub mod format;
pub mod math;
pub mod operation;
pub mod params;

pub use error::ParamError;
pub use format::format_decimal;
pub use math::{MathService, StandardMath};
pub use operation::Operation;
pub use params::{parse_params, ParsedInputs};
