#![no_std]
#![no_main]

use tally_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use tally_counter::{Config, EdgeReaction, Store};
    use tally_firmware::system::System;
    use tally_firmware::testlib::wait_until_line_is;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = stm32h7xx_hal::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    #[test]
    fn line_rests_high_through_its_pull_up(system: &mut System) {
        defmt::info!("Leave the line open");
        defmt::assert!(system.line.level());
    }

    #[test]
    fn line_follows_the_contact(system: &mut System) {
        defmt::info!("Short the line to ground");
        wait_until_line_is(&system.line, false);

        defmt::info!("Release the line");
        wait_until_line_is(&system.line, true);
    }

    #[test]
    fn impulses_on_the_line_are_counted(system: &mut System) {
        const MS: u32 = 400_000_000 / 1000;
        const CONFIG: Config = Config {
            inverted: true,
            debounce_ms: 20,
        };

        let mut device = Store::new(CONFIG, system.line.level());

        defmt::info!("Send three impulses within ten seconds");
        let mut raw = system.line.level();
        for _ in 0..10_000 {
            let now = system.line.level();
            if now != raw {
                raw = now;
                if device.on_edge(raw, || ()) == EdgeReaction::Armed {
                    // Poor man's scheduler: sleep through the window and
                    // run the settle check by hand.
                    cortex_m::asm::delay(CONFIG.debounce_ms * MS);
                    device.on_settle(system.line.level());
                    raw = system.line.level();
                }
            }
            cortex_m::asm::delay(MS);
        }

        defmt::info!("Counted {:?} impulses", device.count());
        defmt::assert!(device.count() >= 3);
    }
}
