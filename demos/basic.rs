// Example: sliding windows and chains over borrowed data.
use seqview::{ForwardSequence, chained, sliding_windows};

fn main() {
    let readings = [3, 1, 4, 1, 5, 9, 2, 6];
    let sums: Vec<i32> = sliding_windows(&readings[..], 3)
        .into_iter()
        .map(|w| w.iter().sum())
        .collect();
    println!("moving sums (3) = {sums:?}");

    let bigrams: Vec<&str> = sliding_windows("héllo", 2).into_iter().collect();
    println!("bigrams = {bigrams:?}");

    let older = [1, 2, 3];
    let newer = [4, 5, 6];
    let timeline = chained(&older[..], &newer[..]);
    println!("count = {}", timeline.count());
    println!("reversed = {:?}", timeline.iter().rev().collect::<Vec<_>>());

    let pairs: Vec<Vec<i32>> = timeline
        .sliding_windows(2)
        .into_iter()
        .map(|w| w.into_iter().copied().collect())
        .collect();
    println!("pairs across the seam = {pairs:?}");
}
