//! Start-up phases

use crate::app::{DemoConfig, Engine};
use crate::devices::registers::{Peripheral, VideoMemory};
use crate::println;

const PHASE_COUNT: usize = 2;

/// Validate `config`, then bring up the display. On success the engine is
/// already in its per-frame state and the first picture is on screen.
pub fn init_engine<P: Peripheral, V: VideoMemory>(
    registers: P,
    vram: V,
    config: DemoConfig,
) -> Result<Engine<P, V>, &'static str> {
    println!("== gba-raster: {} ==", config.name);

    init_phase(1, "Configuration", || config.validate())?;

    let mut engine = Engine::new(registers, vram, config);
    init_phase(2, "Display", || {
        engine.start();
        Ok(())
    })?;

    println!("ready");
    Ok(engine)
}

fn init_phase(
    index: usize,
    name: &'static str,
    init_fn: impl FnOnce() -> Result<(), &'static str>,
) -> Result<(), &'static str> {
    println!("[{}/{}] {}...", index, PHASE_COUNT, name);

    match init_fn() {
        Ok(()) => {
            println!("    ✓ {}", name);
            Ok(())
        }
        Err(e) => {
            println!("    ✗ {} failed: {}", name, e);
            Err(e)
        }
    }
}
