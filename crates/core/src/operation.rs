use crate::format::format_decimal;
use crate::math::MathService;
use crate::params::ParsedInputs;

const OPERANDS: [&str; 2] = ["a", "b"];

/// The closed set of arithmetic endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    pub fn path(self) -> &'static str {
        match self {
            Operation::Add => "/add",
            Operation::Subtract => "/sub",
            Operation::Multiply => "/mul",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Query parameters the operation reads, in validation order.
    pub fn required_params(self) -> [&'static str; 2] {
        OPERANDS
    }

    pub fn apply(self, math: &dyn MathService, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => math.add(a, b),
            Operation::Subtract => math.subtract(a, b),
            Operation::Multiply => math.multiply(a, b),
        }
    }

    /// Runs the operation over both validated operands and formats the result.
    ///
    /// Inputs parsed for any other number of parameters are rejected at compile time:
    ///
    /// ```compile_fail
    /// use arith_core::{parse_params, Operation, StandardMath};
    ///
    /// let inputs = parse_params(Some("a=5"), ["a"]).unwrap();
    /// Operation::Add.dispatch(&StandardMath, &inputs);
    /// ```
    pub fn dispatch(self, math: &dyn MathService, inputs: &ParsedInputs<2>) -> String {
        let [a, b] = inputs.values();
        let result = self.apply(math, a, b);
        tracing::debug!(operation = self.name(), a, b, result, "operation computed");
        format_decimal(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::StandardMath;
    use crate::params::parse_params;

    fn run(op: Operation, query: &str) -> String {
        let inputs = parse_params(Some(query), op.required_params()).unwrap();
        op.dispatch(&StandardMath, &inputs)
    }

    #[test]
    fn documented_scenarios() {
        assert_eq!(run(Operation::Add, "a=5&b=3"), "8.00");
        assert_eq!(run(Operation::Subtract, "a=3&b=10"), "-7.00");
        assert_eq!(run(Operation::Multiply, "a=-2&b=-5"), "10.00");
        assert_eq!(run(Operation::Add, "a=0&b=5"), "5.00");
        assert_eq!(run(Operation::Multiply, "a=7&b=0"), "0.00");
    }

    #[test]
    fn decimal_operands() {
        assert_eq!(run(Operation::Add, "a=2.5&b=1.5"), "4.00");
        assert_eq!(run(Operation::Subtract, "a=7.5&b=2.3"), "5.20");
        assert_eq!(run(Operation::Multiply, "a=2.5&b=4"), "10.00");
    }

    #[test]
    fn operand_order_matters_for_subtraction() {
        assert_eq!(run(Operation::Subtract, "b=3&a=10"), "7.00");
    }

    #[test]
    fn operands_are_taken_positionally() {
        let inputs = parse_params(Some("x=10&y=4"), ["x", "y"]).unwrap();
        assert_eq!(Operation::Subtract.dispatch(&StandardMath, &inputs), "6.00");
    }

    #[test]
    fn paths_are_distinct() {
        let paths: Vec<_> = Operation::ALL.iter().map(|op| op.path()).collect();
        assert_eq!(paths, ["/add", "/sub", "/mul"]);
    }

    struct Recording;

    impl MathService for Recording {
        fn add(&self, _: f64, _: f64) -> f64 {
            1.0
        }
        fn subtract(&self, _: f64, _: f64) -> f64 {
            2.0
        }
        fn multiply(&self, _: f64, _: f64) -> f64 {
            3.0
        }
    }

    #[test]
    fn dispatches_through_injected_service() {
        let inputs = parse_params(Some("a=9&b=9"), OPERANDS).unwrap();
        assert_eq!(Operation::Add.dispatch(&Recording, &inputs), "1.00");
        assert_eq!(Operation::Subtract.dispatch(&Recording, &inputs), "2.00");
        assert_eq!(Operation::Multiply.dispatch(&Recording, &inputs), "3.00");
    }
}
