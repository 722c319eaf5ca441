//! Pattern matching engine.

mod matcher;
pub mod trace;


pub use matcher::Matcher;
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};
