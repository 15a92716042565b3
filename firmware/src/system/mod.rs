pub mod console;
pub mod line;
pub mod wake;

pub use stm32h7xx_hal as hal;

use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

use console::{Reader, Writer};
use line::Line;
use wake::Wake;

pub type StatusLed = hal::gpio::gpiob::PB14<hal::gpio::Output<hal::gpio::PushPull>>;

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: StatusLed,
    pub line: Line,
    pub console_reader: Reader,
    pub console_writer: Writer,
    pub wake: Wake,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// Panics when the service console cannot be brought up.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, mut dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let pwrcfg = dp.PWR.constrain().freeze();
        let ccdr = dp
            .RCC
            .constrain()
            .use_hse(16.MHz())
            .sys_ck(400.MHz())
            .freeze(pwrcfg, &dp.SYSCFG);

        let mono = Systick::new(cp.SYST, 400_000_000);

        let gpioa = dp.GPIOA.split(ccdr.peripheral.GPIOA);
        let gpiob = dp.GPIOB.split(ccdr.peripheral.GPIOB);

        let status_led = gpiob.pb14.into_push_pull_output();

        let line = Line::new(gpioa.pa0.into_pull_up_input(), &mut dp.SYSCFG, &mut dp.EXTI);

        let serial = dp
            .USART1
            .serial(
                (gpioa.pa9.into_alternate(), gpioa.pa10.into_alternate()),
                115_200.bps(),
                ccdr.peripheral.USART1,
                &ccdr.clocks,
            )
            .unwrap();
        let (console_reader, console_writer) = console::open(serial);

        let wake = Wake::new();

        Self {
            mono,
            status_led,
            line,
            console_reader,
            console_writer,
            wake,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal and external memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
