//! # Debug Console
//!
//! Line-buffered text output behind the crate's `println!` macro.
//!
//! ## Sinks
//!
//! | Sink       | Destination                                         |
//! |------------|-----------------------------------------------------|
//! | `Silent`   | dropped (default, safe everywhere)                  |
//! | `Mgba`     | emulator debug window at `0x04FF_F600`              |
//! | `Callback` | a plain function, e.g. stdout on the hosted runner  |
//!
//! A line is collected until `'\n'` and then handed to the sink in one
//! piece. The emulator protocol takes at most 256 bytes per message; longer
//! lines are cut.

use core::fmt;
use core::ptr::{read_volatile, write_volatile};

use crate::format::LineBuf;

const MGBA_STRING: usize = 0x04FF_F600;
const MGBA_FLAGS: usize = 0x04FF_F700;
const MGBA_ENABLE: usize = 0x04FF_F780;
const MGBA_ENABLE_REQUEST: u16 = 0xC0DE;
const MGBA_ENABLE_ACK: u16 = 0x1DEA;
const MGBA_SEND: u16 = 0x100;
const MGBA_LEVEL_INFO: u16 = 3;

/// One byte is kept for the terminator.
const LINE_CAPACITY: usize = 255;

#[derive(Clone, Copy)]
pub enum LogSink {
    Silent,
    Mgba,
    Callback(fn(&str)),
}

pub struct DebugConsole {
    sink: LogSink,
    line: LineBuf<LINE_CAPACITY>,
}

impl DebugConsole {
    pub const fn new() -> Self {
        Self { sink: LogSink::Silent, line: LineBuf::new() }
    }

    pub fn set_sink(&mut self, sink: LogSink) {
        self.line.clear();
        self.sink = sink;
    }

    pub fn is_silent(&self) -> bool {
        matches!(self.sink, LogSink::Silent)
    }

    /// Asks the emulator for its debug window. Returns `false` (and stays
    /// silent) on real hardware, where nothing acknowledges the request.
    ///
    /// # Safety
    /// Touches fixed I/O addresses; only call on the target.
    pub unsafe fn enable_mgba(&mut self) -> bool {
        write_volatile(MGBA_ENABLE as *mut u16, MGBA_ENABLE_REQUEST);
        let acked = read_volatile(MGBA_ENABLE as *const u16) == MGBA_ENABLE_ACK;
        if acked {
            self.set_sink(LogSink::Mgba);
        }
        acked
    }

    fn flush_line(&mut self) {
        match self.sink {
            LogSink::Silent => {}
            LogSink::Callback(emit) => emit(self.line.as_str()),
            LogSink::Mgba => {
                let bytes = self.line.as_bytes();
                // Safety: the sink is only selected after the emulator acked
                unsafe {
                    let out = MGBA_STRING as *mut u8;
                    for (i, &b) in bytes.iter().enumerate() {
                        write_volatile(out.add(i), b);
                    }
                    write_volatile(out.add(bytes.len()), 0);
                    write_volatile(MGBA_FLAGS as *mut u16, MGBA_SEND | MGBA_LEVEL_INFO);
                }
            }
        }
        self.line.clear();
    }
}

impl Default for DebugConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for DebugConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.is_silent() {
            return Ok(());
        }
        let mut rest = s;
        while let Some(nl) = rest.find('\n') {
            self.line.push_str(&rest[..nl]);
            self.flush_line();
            rest = &rest[nl + 1..];
        }
        self.line.push_str(rest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use spin::Mutex;

    static CAPTURED: Mutex<LineBuf<512>> = Mutex::new(LineBuf::new());

    fn capture(line: &str) {
        let mut out = CAPTURED.lock();
        out.push_str(line);
        out.push_str("|");
    }

    #[test]
    fn callback_receives_whole_lines() {
        let mut console = DebugConsole::new();
        console.set_sink(LogSink::Callback(capture));
        write!(console, "frame {}", 3).unwrap();
        writeln!(console, " ok").unwrap();
        writeln!(console, "second\nthird").unwrap();
        write!(console, "pending").unwrap();
        assert_eq!(CAPTURED.lock().as_str(), "frame 3 ok|second|third|");
    }

    #[test]
    fn silent_console_buffers_nothing() {
        let mut console = DebugConsole::new();
        writeln!(console, "dropped").unwrap();
        assert!(console.is_silent());
        assert!(console.line.is_empty());
    }
}
