#![no_std]
#![no_main]

use tally_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use tally_firmware::system::console::Received;
    use tally_firmware::system::System;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = stm32h7xx_hal::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    #[test]
    fn an_lf_framed_command_arrives_as_typed(system: &mut System) {
        let reader = &mut system.console_reader;
        for byte in *b"255" {
            defmt::assert!(reader.accept(byte).is_none());
        }
        match reader.accept(b'\n') {
            Some(Received::Line(line)) => defmt::assert!(&line[..] == b"255"),
            _ => defmt::panic!("Expected a complete line"),
        }
    }

    #[test]
    fn a_crlf_framed_read_request_is_an_empty_line(system: &mut System) {
        let reader = &mut system.console_reader;
        defmt::assert!(reader.accept(b'\r').is_none());
        match reader.accept(b'\n') {
            Some(Received::Line(line)) => defmt::assert!(line.is_empty()),
            _ => defmt::panic!("Expected a complete line"),
        }
    }

    #[test]
    fn a_crlf_framed_command_loses_only_its_trailing_carriage_return(system: &mut System) {
        let reader = &mut system.console_reader;
        for byte in *b"0x1f\r" {
            defmt::assert!(reader.accept(byte).is_none());
        }
        match reader.accept(b'\n') {
            Some(Received::Line(line)) => defmt::assert!(&line[..] == b"0x1f"),
            _ => defmt::panic!("Expected a complete line"),
        }
    }

    #[test]
    fn an_oversized_line_is_reported_as_overflow(system: &mut System) {
        let reader = &mut system.console_reader;
        for _ in 0..100 {
            defmt::assert!(reader.accept(b'9').is_none());
        }
        match reader.accept(b'\n') {
            Some(Received::Overflow) => {}
            _ => defmt::panic!("Expected an overflow report"),
        }

        // The poisoned line must not leak into the next one.
        match reader.accept(b'\n') {
            Some(Received::Line(line)) => defmt::assert!(line.is_empty()),
            _ => defmt::panic!("Expected a complete line"),
        }
    }
}
