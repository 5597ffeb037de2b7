use thiserror::Error;

/// Validation failures raised while reading numeric query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("{}", missing_message(.names))]
    MissingParameter { names: Vec<String> },
    #[error("parameter '{name}' must be a valid number")]
    InvalidNumber { name: String },
}

fn missing_message(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
    match quoted.as_slice() {
        [] => "query parameters are required".to_string(),
        [only] => format!("query parameter {only} is required"),
        [first, second] => format!("both {first} and {second} query parameters are required"),
        many => format!("all of {} query parameters are required", many.join(", ")),
    }
}
