/// Budget-aware string joining for display columns.

/// Join `items` with `sep`, truncating with `marker` once `max_chars` is
/// exceeded.
///
/// A join that is strictly under budget is returned unchanged. Otherwise
/// items are accepted left to right while the running total (item plus
/// separator) stays below `max_chars - marker.len()`, and the marker is
/// appended as a final joined element. The first item is always accepted,
/// even when it alone exceeds the budget — downstream formatting budgets
/// depend on this cutoff behavior.
pub fn join_bounded<S: AsRef<str>>(sep: &str, items: &[S], max_chars: usize, marker: &str) -> String {
    let full: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    let full = full.join(sep);
    if full.len() < max_chars {
        return full;
    }

    let budget = max_chars.saturating_sub(marker.len());
    let mut n_chars = 0;
    let mut n_items = 0;
    for (i, item) in items.iter().enumerate() {
        n_chars += item.as_ref().len() + sep.len();
        if i == 0 || n_chars < budget {
            n_items += 1;
        } else {
            break;
        }
    }

    let mut kept: Vec<&str> = items[..n_items].iter().map(AsRef::as_ref).collect();
    kept.push(marker);
    kept.join(sep)
}
