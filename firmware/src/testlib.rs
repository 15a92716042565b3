use crate::system::line::Line;

const MS: u32 = 400_000_000 / 1000;

pub fn wait_until_line_is(line: &Line, level: bool) {
    while line.level() != level {
        cortex_m::asm::delay(MS);
    }
}
