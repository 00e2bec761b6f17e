//! Fills 100 bitmaps with every 16-bit integer but the last one, then waits
//! for its resident memory to be inspected (`ps -o rss,cmd -p <pid>`).

use densebench::{hold, resident, Bitmap, Config, Population, HOLD_DURATION};
use std::hint::black_box;

fn main() {
    env_logger::init();

    let bitmaps = Population::<Bitmap>::populate(&Config::default());
    log::info!("bitmaps: {}", bitmaps.stats());
    resident::log_current();

    hold(HOLD_DURATION);
    black_box(&bitmaps);
}
