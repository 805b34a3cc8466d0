// Debug support - trace logging only.
//
// An interactive debugger (breakpoints, step modes, a disassembler,
// memory/PPU viewers) is host UI and out of scope for this core; what
// survives is the trace-logging path a host can enable to watch CPU
// execution.

pub mod logger;

pub use logger::{LogLevel, Logger, TraceEntry};
