//! Fills 100 ordered sets with every 16-bit integer but the last one, then
//! waits for its resident memory to be inspected
//! (`ps -o rss,cmd -p <pid>`).

use densebench::{
    hold, resident, Config, OrderedSet, Population, HOLD_DURATION,
};
use std::hint::black_box;

fn main() {
    env_logger::init();

    println!("size of node: {}", OrderedSet::node_size());

    let sets = Population::<OrderedSet>::populate(&Config::default());
    log::info!("ordered sets (estimated): {}", sets.stats());
    log::debug!(
        "internal node: {} bytes",
        OrderedSet::internal_node_size()
    );
    resident::log_current();

    hold(HOLD_DURATION);
    black_box(&sets);
}
