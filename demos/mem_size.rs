use densebench::{fill, Bitmap, Config, DenseSet, OrderedSet};
use humansize::{file_size_opts as options, FileSize};

fn main() {
    for fill_bound in [0, 1, 10, 100, 1_000, 10_000, u16::MAX] {
        let config = Config {
            instances: 1,
            fill_bound,
        };
        let bitmap = fill::<Bitmap>(&config);
        let ordered = fill::<OrderedSet>(&config);

        println!(
            "count: {:5} Bitmap:{:9} OrderedSet:{:9}",
            fill_bound,
            human_size(&bitmap),
            human_size(&ordered),
        );
    }
}

/// Formats the estimated footprint of a set.
fn human_size<S: DenseSet>(set: &S) -> String {
    set.mem_size()
        .file_size(options::DECIMAL)
        .expect("positive size")
}
