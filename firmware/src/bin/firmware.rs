#![no_main]
#![no_std]

use tally_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI1, EXTI2, EXTI3])]
mod app {
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use tally_counter::chardev::{self, InvalidArgument};
    use tally_counter::{Config, Store};
    use tally_firmware::system::console::{Reader, Received, Writer};
    use tally_firmware::system::line::Line;
    use tally_firmware::system::{StatusLed, System};

    /// Board description of the counted line, standing in for a
    /// configuration loader.
    ///
    /// The reed contact pulls the line to ground, so its logical level is
    /// inverted, and the contact needs a debounce window.
    const CONFIG: Config = Config {
        inverted: true,
        debounce_ms: 50,
    };

    /// Let the line wake the system from Standby.
    const WAKE_FROM_STANDBY: bool = true;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {
        device: Store<settle::SpawnHandle>,
        line: Line,
    }

    #[local]
    struct Local {
        status_led: StatusLed,
        reader: Reader,
        writer: Writer,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;

        let mut wake = system.wake;
        if WAKE_FROM_STANDBY {
            wake.enable();
        }

        let device = Store::new(CONFIG, system.line.level());

        blink::spawn(true).unwrap();

        (
            Shared {
                device,
                line: system.line,
            },
            Local {
                status_led: system.status_led,
                reader: system.console_reader,
                writer: system.console_writer,
            },
            init::Monotonics(mono),
        )
    }

    /// Edge interrupt of the counted line.
    ///
    /// Stays non-blocking: it samples the level, runs the inline commit
    /// or arms the debounce window, and returns.
    #[task(binds = EXTI0, priority = 3, shared = [device, line])]
    fn edge(cx: edge::Context) {
        (cx.shared.device, cx.shared.line).lock(|device, line| {
            line.clear_pending();
            let raw = line.level();
            device.on_edge(raw, || {
                settle::spawn_after(u64::from(CONFIG.debounce_ms).millis()).unwrap()
            });
        });
    }

    /// Settle check of an elapsed debounce window.
    ///
    /// Capacity of two: an edge may arm a fresh window while the previous
    /// check still occupies its slot.
    #[task(priority = 2, capacity = 2, shared = [device, line])]
    fn settle(cx: settle::Context) {
        (cx.shared.device, cx.shared.line).lock(|device, line| {
            device.on_settle(line.level());
        });
    }

    /// Service console receiver.
    #[task(binds = USART1, priority = 2, local = [reader])]
    fn console(cx: console::Context) {
        while let Some(received) = cx.local.reader.poll() {
            if command::spawn(received).is_err() {
                defmt::warn!("Console flooded, dropping a line");
            }
        }
    }

    /// Executes one console command against the counter.
    #[task(priority = 1, capacity = 2, shared = [device], local = [writer])]
    fn command(mut cx: command::Context, received: Received) {
        let mut reply = [0; chardev::RENDERED_MAX];

        let outcome = match received {
            Received::Line(line) => cx.shared.device.lock(|device| {
                if line.is_empty() {
                    chardev::read(device, &mut reply, 0)
                } else {
                    chardev::write(device, &line).map(|_| 0)
                }
            }),
            Received::Overflow => Err(InvalidArgument),
        };

        match outcome {
            Ok(len) => cx.local.writer.send(&reply[..len]),
            Err(InvalidArgument) => cx.local.writer.send(b"?\n"),
        }
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool) {
        if on {
            cx.local.status_led.set_high();
        } else {
            cx.local.status_led.set_low();
        }
        blink::spawn_after(500.millis(), !on).unwrap();
    }
}
