use densebench::{Bitmap, Config, OrderedSet, Population};

fn main() {
    let config = Config {
        instances: 10,
        ..Config::default()
    };

    println!("size of node: {}", OrderedSet::node_size());
    println!("{:#?}", Population::<Bitmap>::populate(&config).stats());
    println!("{:#?}", Population::<OrderedSet>::populate(&config).stats());
}
