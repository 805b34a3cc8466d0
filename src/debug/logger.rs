// Logger - trace logging for CPU execution
//
// Configurable log levels, an in-memory trace buffer, and optional file
// output. Kept deliberately small: this core has no interactive debugger,
// just the trace path a host can turn on to watch what the CPU is doing.

use crate::cpu::trace::CpuState;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    None,
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone)]
pub enum TraceEntry {
    Cpu(CpuState),
    Message(String),
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEntry::Cpu(state) => write!(f, "CPU: {}", state),
            TraceEntry::Message(msg) => write!(f, "{}", msg),
        }
    }
}

pub struct Logger {
    log_level: LogLevel,
    cpu_trace: bool,
    trace_buffer: Vec<TraceEntry>,
    max_buffer_size: usize,
    output_file: Option<File>,
}

impl Logger {
    pub fn new() -> Self {
        Logger {
            log_level: LogLevel::None,
            cpu_trace: false,
            trace_buffer: Vec::new(),
            max_buffer_size: 10_000,
            output_file: None,
        }
    }

    pub fn set_log_level(&mut self, level: LogLevel) {
        self.log_level = level;
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn enable_cpu_trace(&mut self) {
        self.cpu_trace = true;
    }

    pub fn disable_cpu_trace(&mut self) {
        self.cpu_trace = false;
    }

    pub fn is_cpu_trace_enabled(&self) -> bool {
        self.cpu_trace && self.log_level >= LogLevel::Trace
    }

    pub fn set_max_buffer_size(&mut self, size: usize) {
        self.max_buffer_size = size;
        if size > 0 && self.trace_buffer.len() > size {
            self.trace_buffer.drain(0..self.trace_buffer.len() - size);
        }
    }

    pub fn open_log_file<P: AsRef<Path>>(&mut self, path: P) -> std::io::Result<()> {
        self.output_file = Some(File::create(path)?);
        Ok(())
    }

    pub fn close_log_file(&mut self) {
        self.output_file = None;
    }

    pub fn log_cpu_state(&mut self, state: &CpuState) {
        if !self.is_cpu_trace_enabled() {
            return;
        }
        self.add_entry(TraceEntry::Cpu(state.clone()));
    }

    pub fn log_message(&mut self, level: LogLevel, message: String) {
        if level > self.log_level {
            return;
        }
        self.add_entry(TraceEntry::Message(message));
    }

    fn add_entry(&mut self, entry: TraceEntry) {
        if let Some(file) = &mut self.output_file {
            let _ = writeln!(file, "{}", entry);
        }
        self.trace_buffer.push(entry);
        if self.max_buffer_size > 0 && self.trace_buffer.len() > self.max_buffer_size {
            self.trace_buffer.remove(0);
        }
    }

    pub fn trace_buffer(&self) -> &[TraceEntry] {
        &self.trace_buffer
    }

    pub fn clear_buffer(&mut self) {
        self.trace_buffer.clear();
    }

    pub fn last_entries(&self, count: usize) -> &[TraceEntry] {
        let start = self.trace_buffer.len().saturating_sub(count);
        &self.trace_buffer[start..]
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
