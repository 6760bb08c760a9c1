use anyhow::Result;
use grouped_totals::{group_totals, summarize};
use std::io::{self, BufRead};

fn main() -> Result<()> {
    let stdin = io::stdin();

    let totals = group_totals(stdin.lock().lines().filter_map(|s| s.ok()))?;
    let summary = summarize(totals);

    println!("{}", summary.max_total);
    println!("{}", summary.top_three_sum);

    Ok(())
}
