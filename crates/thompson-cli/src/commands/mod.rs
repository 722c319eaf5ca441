pub mod check;
pub mod dump;
pub mod exec;
pub mod pattern_loader;
pub mod postfix;
pub mod run_common;
pub mod samples;
pub mod steps;
pub mod trace;
