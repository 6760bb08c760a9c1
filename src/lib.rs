use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("malformed input: {0:?} is not a non-negative integer")]
pub struct MalformedInput(String);

/// Sums each blank-line-delimited group of lines into one total, in input
/// order.
///
/// A blank line always closes the group before it, so consecutive blank
/// lines emit zero-valued groups. A final group without a trailing blank
/// line is still emitted. Lines containing only whitespace count as blank;
/// whitespace around a value is trimmed before parsing.
pub fn group_totals(
    input: impl Iterator<Item = impl Into<String>>,
) -> Result<Vec<u64>, MalformedInput> {
    let mut totals = Vec::new();
    let mut current_total = 0;
    let mut group_open = false;

    for line in input {
        let line: String = line.into();
        let line = line.trim();

        if line.is_empty() {
            totals.push(current_total);
            current_total = 0;
            group_open = false;
        } else {
            let value = line
                .parse::<u64>()
                .map_err(|_| MalformedInput(line.to_string()))?;
            current_total += value;
            group_open = true;
        }
    }

    if group_open {
        totals.push(current_total);
    }

    Ok(totals)
}

/// Running tracker of the three largest totals seen so far.
///
/// Slots are kept in ascending order; unfilled slots stay at 0, which is
/// the identity for both statistics since totals are non-negative.
#[derive(Debug, Default)]
pub struct TopThree {
    slots: [u64; 3],
}

impl TopThree {
    pub fn push(&mut self, total: u64) {
        if total > self.slots[0] {
            self.slots[0] = total;
            self.slots.sort_unstable();
        }
    }

    pub fn max(&self) -> u64 {
        self.slots[2]
    }

    pub fn sum(&self) -> u64 {
        self.slots.iter().sum()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Summary {
    pub max_total: u64,
    pub top_three_sum: u64,
}

/// Computes the largest total and the sum of the three largest totals in
/// a single pass. Returns zeros for an empty sequence.
pub fn summarize(totals: impl IntoIterator<Item = u64>) -> Summary {
    let mut top = TopThree::default();

    for total in totals {
        top.push(total);
    }

    Summary {
        max_total: top.max(),
        top_three_sum: top.sum(),
    }
}
