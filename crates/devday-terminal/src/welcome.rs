//! Boot animation: both banners, then the greeting typed out in fragments.

use crate::content::{DEVDAY_BANNER, KMONG_BANNER};
use crate::script::ScriptSequence;

const PAUSE_AFTER_KMONG_MS: u32 = 750;
const PAUSE_AFTER_DEVDAY_MS: u32 = 500;
const FAST_TYPING_MS: u32 = 150;

/// Final line, written with no delay after the greeting.
pub const PRESS_ANY_KEY: &str = "press any key to start";

/// Build the welcome script.
pub fn welcome_sequence(banner_delay_ms: u32, typing_delay_ms: u32) -> ScriptSequence {
    ScriptSequence::banner(KMONG_BANNER, banner_delay_ms)
        .step("", PAUSE_AFTER_KMONG_MS)
        .append(ScriptSequence::banner(DEVDAY_BANNER, banner_delay_ms))
        .step("", PAUSE_AFTER_DEVDAY_MS)
        .step("1", typing_delay_ms)
        .step("회", typing_delay_ms)
        .step(" 크", typing_delay_ms)
        .step("몽", typing_delay_ms)
        .step(" 데", FAST_TYPING_MS)
        .step("브", FAST_TYPING_MS)
        .step("데", FAST_TYPING_MS)
        .step("이\r\n", typing_delay_ms)
        .step(PRESS_ANY_KEY, 0)
}
