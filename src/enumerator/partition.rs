//! Ordered integer compositions: the location-budget partitioning a
//! function production's children draw from.

/// Every way to write `total` as an ordered sum of `slots` non-negative
/// integers, e.g. `compositions(2, 2)` yields `[0,2], [1,1], [2,0]`.
pub fn compositions(total: usize, slots: usize) -> Vec<Vec<usize>> {
    if slots == 0 {
        return if total == 0 { vec![Vec::new()] } else { Vec::new() };
    }
    if slots == 1 {
        return vec![vec![total]];
    }

    let mut out = Vec::new();
    for first in 0..=total {
        for mut rest in compositions(total - first, slots - 1) {
            let mut composition = Vec::with_capacity(slots);
            composition.push(first);
            composition.append(&mut rest);
            out.push(composition);
        }
    }
    out
}
