// Example: O(1) offsets and distances across the seam of a chain of ranges.
use seqview::{ChainIndex, ForwardSequence, chained};

fn main() {
    let len = usize::MAX / 8;
    let chain = chained(0..len, 0..len);

    let start = chain.start_index();
    let end = chain.end_index();
    println!("distance(start, end) = {}", chain.distance(&start, &end));

    let near_seam = chain.index_at(len - 2);
    let across = chain.index_offset_by(&near_seam, 5);
    println!("{near_seam:?} + 5 = {across:?}");
    assert_eq!(across, ChainIndex::Second(3));
    println!("back again = {:?}", chain.index_offset_by(&across, -5));

    let windows = chain.sliding_windows(1000);
    let last = windows.index_at(windows.count() - 1);
    println!("last window = {:?}", last.bounds());
}
