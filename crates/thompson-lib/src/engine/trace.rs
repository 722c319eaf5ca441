//! Tracing infrastructure for watching the matcher explore.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The matcher is generic over [`Tracer`]. With [`NoopTracer`] every hook is
//! an `#[inline(always)]` empty function, so the calls and their arguments
//! compile away and the plain matching path carries no tracing state.
//!
//! [`PrintTracer`] collects one line per hook, filtered by [`Verbosity`].

use crate::Colors;
use crate::graph::StateId;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: symbol moves, accept, reject.
    #[default]
    Default,
    /// Verbose (-v): also visits and epsilon moves.
    Verbose,
    /// Very verbose (-vv): also pairs skipped because they were already seen.
    VeryVerbose,
}

/// Tracer trait for matcher instrumentation.
///
/// Positions count input symbols (not bytes), from 0 to the input length.
///
/// Each method is called at a specific point during exploration:
/// - `trace_start` - once, before the first pair is explored
/// - `trace_visit` - when a `(state, position)` pair is first explored
/// - `trace_revisit` - when a pair is popped again and skipped
/// - `trace_epsilon` - when an epsilon move is scheduled
/// - `trace_consume` - when a symbol move is scheduled
/// - `trace_accept` - when the accept state is reached at end of input
/// - `trace_exhausted` - when no pairs remain
pub trait Tracer {
    fn trace_start(&mut self, start: StateId, accept: StateId, input: &str);

    fn trace_visit(&mut self, state: StateId, pos: usize);

    fn trace_revisit(&mut self, state: StateId, pos: usize);

    fn trace_epsilon(&mut self, from: StateId, to: StateId, pos: usize);

    fn trace_consume(&mut self, from: StateId, symbol: char, to: StateId, pos: usize);

    fn trace_accept(&mut self, state: StateId, pos: usize);

    /// `visited` is the number of distinct pairs explored.
    fn trace_exhausted(&mut self, visited: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _start: StateId, _accept: StateId, _input: &str) {}

    #[inline(always)]
    fn trace_visit(&mut self, _state: StateId, _pos: usize) {}

    #[inline(always)]
    fn trace_revisit(&mut self, _state: StateId, _pos: usize) {}

    #[inline(always)]
    fn trace_epsilon(&mut self, _from: StateId, _to: StateId, _pos: usize) {}

    #[inline(always)]
    fn trace_consume(&mut self, _from: StateId, _symbol: char, _to: StateId, _pos: usize) {}

    #[inline(always)]
    fn trace_accept(&mut self, _state: StateId, _pos: usize) {}

    #[inline(always)]
    fn trace_exhausted(&mut self, _visited: usize) {}
}

/// Builder for [`PrintTracer`].
#[derive(Debug, Default)]
pub struct PrintTracerBuilder {
    verbosity: Verbosity,
    colored: bool,
}

impl PrintTracerBuilder {
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colored = enabled;
        self
    }

    pub fn build(self) -> PrintTracer {
        PrintTracer {
            verbosity: self.verbosity,
            colors: Colors::new(self.colored),
            lines: Vec::new(),
        }
    }
}

/// Tracer that collects the exploration as text lines.
///
/// ```text
/// match "ab": start S4, accept S5
///   S0 @0 ─a→ S1 @1
/// accept S5 @2
/// ```
#[derive(Debug)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn builder() -> PrintTracerBuilder {
        PrintTracerBuilder::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn shows(&self, level: Verbosity) -> bool {
        match level {
            Verbosity::Default => true,
            Verbosity::Verbose => self.verbosity != Verbosity::Default,
            Verbosity::VeryVerbose => self.verbosity == Verbosity::VeryVerbose,
        }
    }

    fn pos(&self, pos: usize) -> String {
        self.colors.dimmed(format_args!("@{pos}"))
    }

    /// `─label→`
    fn arrow(&self, label: &str) -> String {
        let c = &self.colors;
        format!("{}{}{}", c.dimmed("─"), label, c.dimmed("→"))
    }
}

impl Tracer for PrintTracer {
    fn trace_start(&mut self, start: StateId, accept: StateId, input: &str) {
        let c = self.colors;
        self.lines.push(format!(
            "match {:?}: start {}, accept {}",
            input,
            c.state(start),
            c.state(accept)
        ));
    }

    fn trace_visit(&mut self, state: StateId, pos: usize) {
        // Visit sub-lines hidden in default verbosity
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let line = format!("  visit {} {}", self.colors.state(state), self.pos(pos));
        self.lines.push(line);
    }

    fn trace_revisit(&mut self, state: StateId, pos: usize) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        let c = self.colors;
        let line = format!(
            "  {}  {} {} {}",
            c.dimmed("skip"),
            c.state(state),
            self.pos(pos),
            c.dimmed("(seen)")
        );
        self.lines.push(line);
    }

    fn trace_epsilon(&mut self, from: StateId, to: StateId, pos: usize) {
        // Epsilon sub-lines hidden in default verbosity
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let c = self.colors;
        let line = format!(
            "  {} {} {} {}",
            c.state(from),
            self.pos(pos),
            self.arrow(&c.dimmed("ε")),
            c.state(to)
        );
        self.lines.push(line);
    }

    fn trace_consume(&mut self, from: StateId, symbol: char, to: StateId, pos: usize) {
        let c = self.colors;
        let line = format!(
            "  {} {} {} {} {}",
            c.state(from),
            self.pos(pos),
            self.arrow(&c.symbol(symbol)),
            c.state(to),
            self.pos(pos + 1)
        );
        self.lines.push(line);
    }

    fn trace_accept(&mut self, state: StateId, pos: usize) {
        let c = self.colors;
        let line = format!(
            "{}accept{} {} {}",
            c.green,
            c.reset,
            c.state(state),
            self.pos(pos)
        );
        self.lines.push(line);
    }

    fn trace_exhausted(&mut self, visited: usize) {
        let c = self.colors;
        let pairs = if visited == 1 { "pair" } else { "pairs" };
        self.lines.push(format!(
            "{}reject{}: no path left after {visited} {pairs}",
            c.red, c.reset
        ));
    }
}
