#![cfg_attr(target_os = "none", no_std, no_main)]

use gba_raster::app::DemoConfig;
use gba_raster::kernel::init_engine;

#[cfg(target_os = "none")]
mod target {
    use core::hint::spin_loop;
    use core::panic::PanicInfo;

    use gba_raster::devices::input::KeyState;
    use gba_raster::devices::registers::{GbaRegisters, GbaVram, Peripheral};
    use gba_raster::{println, DEBUG};

    use super::{init_engine, DemoConfig};

    #[no_mangle]
    pub extern "C" fn main() -> ! {
        // Safety: single owner of the register block and video memory
        let (registers, vram) = unsafe { (GbaRegisters::new(), GbaVram::new()) };
        unsafe {
            DEBUG.lock().enable_mgba();
        }

        let config = DemoConfig::for_boot_keys(KeyState::from_register(registers.read_keys()));
        match init_engine(registers, vram, config) {
            Ok(engine) => engine.run(),
            Err(e) => {
                println!("start-up failed: {}", e);
                halt()
            }
        }
    }

    fn halt() -> ! {
        loop {
            spin_loop();
        }
    }

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        println!("PANIC : {} | {:?}", info.message(), info.location());
        halt()
    }
}

/// Hosted runner: plays every preset against the simulator with a scripted
/// input sequence and logs to stdout.
#[cfg(not(target_os = "none"))]
fn main() {
    use gba_raster::devices::debug_console::LogSink;
    use gba_raster::devices::input::Buttons;
    use gba_raster::devices::simulated::{SimulatedRegisters, SimulatedVram};
    use gba_raster::DEBUG;

    const FRAMES: u32 = 120;

    fn to_stdout(line: &str) {
        println!("{}", line);
    }

    fn script(frame: u32) -> Buttons {
        match frame {
            0..=29 => Buttons::RIGHT,
            30..=49 => Buttons::DOWN | Buttons::R,
            50..=59 => Buttons::A,
            60..=89 => Buttons::LEFT | Buttons::UP | Buttons::L,
            90..=99 => Buttons::SELECT,
            _ => Buttons::NONE,
        }
    }

    DEBUG.lock().set_sink(LogSink::Callback(to_stdout));

    let presets = [
        DemoConfig::solid_fill(),
        DemoConfig::wireframe_test(),
        DemoConfig::dirty_rect_mover(),
        DemoConfig::fixed_point_mover(),
        DemoConfig::transform_playground(),
    ];

    for config in presets {
        let mut engine = match init_engine(SimulatedRegisters::new(), SimulatedVram::new(), config) {
            Ok(engine) => engine,
            Err(e) => {
                println!("{}: start-up failed: {}", config.name, e);
                continue;
            }
        };
        engine.sync().framebuffer().vram_mut().reset_write_count();

        for frame in 0..FRAMES {
            engine.sync().registers_mut().set_pressed(script(frame));
            engine.step();
        }

        let writes = engine.sync().framebuffer().vram().writes();
        println!(
            "{}: {} frames, {} pixel writes after start-up, {:?}",
            config.name,
            engine.frames(),
            writes,
            engine.scene().object
        );
    }
}
