//! Arithmetic capability shared by every request handler.

use tracing::trace;

/// The arithmetic operations exposed over HTTP.
///
/// Implementations must be stateless: one instance is created at startup and
/// shared by all concurrent handlers.
pub trait MathService: Send + Sync {
    fn add(&self, a: f64, b: f64) -> f64;
    fn subtract(&self, a: f64, b: f64) -> f64;
    fn multiply(&self, a: f64, b: f64) -> f64;
}

/// Plain IEEE-754 double arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMath;

impl StandardMath {
    pub fn new() -> Self {
        Self
    }
}

impl MathService for StandardMath {
    fn add(&self, a: f64, b: f64) -> f64 {
        trace!(a, b, "performing addition");
        a + b
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        trace!(a, b, "performing subtraction");
        a - b
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        trace!(a, b, "performing multiplication");
        a * b
    }
}
