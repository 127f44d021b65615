use super::{rasterize, Pixel};
use crate::pegs::Peg;

/// Per-run memo of rasterized lines keyed by unordered peg pair.
///
/// Storage is a lower-triangular table (diagonal included): row `hi` holds the
/// pairs `{lo, hi}` with `lo <= hi`. Rows are allocated on first use, so a run
/// only pays for the pegs it actually visits.
#[derive(Clone, Debug)]
pub struct LineCache {
    rows: Vec<Vec<Option<Vec<Pixel>>>>,
    rasterized: usize,
}

impl LineCache {
    pub fn new(total_pegs: usize) -> Self {
        Self {
            rows: vec![Vec::new(); total_pegs],
            rasterized: 0,
        }
    }

    #[inline]
    fn ordered(a: usize, b: usize) -> (usize, usize) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Cached line between pegs `a` and `b`, if already rasterized.
    pub fn get(&self, a: usize, b: usize) -> Option<&[Pixel]> {
        let (lo, hi) = Self::ordered(a, b);
        self.rows.get(hi)?.get(lo)?.as_deref()
    }

    /// Line between two pegs, rasterizing it on first request.
    pub fn get_or_compute(&mut self, a: &Peg, b: &Peg) -> &[Pixel] {
        let (lo, hi) = Self::ordered(a.index, b.index);
        let row = &mut self.rows[hi];
        if row.is_empty() {
            row.resize(hi + 1, None);
        }
        let line = &mut row[lo];
        if line.is_none() {
            self.rasterized += 1;
        }
        line.get_or_insert_with(|| rasterize(a.pos, b.pos))
    }

    /// Number of lines rasterized so far (cache misses).
    pub fn rasterized(&self) -> usize {
        self.rasterized
    }

    /// Number of allocated pair slots.
    pub fn allocated_slots(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pegs::compute_pegs;

    #[test]
    fn reversed_pair_hits_the_cache() {
        let pegs = compute_pegs(4, 100.0);
        let mut cache = LineCache::new(pegs.len());

        let forward = cache.get_or_compute(&pegs[2], &pegs[5]).to_vec();
        assert_eq!(cache.rasterized(), 1);

        let backward = cache.get_or_compute(&pegs[5], &pegs[2]).to_vec();
        assert_eq!(cache.rasterized(), 1, "second lookup must not rasterize");
        assert_eq!(forward, backward);
        assert_eq!(forward, rasterize(pegs[2].pos, pegs[5].pos));
    }

    #[test]
    fn distinct_pairs_get_distinct_slots() {
        let pegs = compute_pegs(3, 60.0);
        let mut cache = LineCache::new(pegs.len());
        for a in &pegs {
            for b in &pegs {
                cache.get_or_compute(a, b);
            }
        }
        let n = pegs.len();
        assert_eq!(cache.rasterized(), n * (n + 1) / 2);
        assert_eq!(
            cache.get(0, 7),
            Some(rasterize(pegs[0].pos, pegs[7].pos).as_slice())
        );
        assert_eq!(cache.get(7, 0), cache.get(0, 7));
    }

    #[test]
    fn untouched_pairs_are_empty() {
        let cache = LineCache::new(8);
        assert!(cache.get(1, 6).is_none());
        assert_eq!(cache.rasterized(), 0);
        assert_eq!(cache.allocated_slots(), 0);
    }

    #[test]
    fn rows_are_allocated_on_demand() {
        let pegs = compute_pegs(400, 1600.0);
        let mut cache = LineCache::new(pegs.len());
        cache.get_or_compute(&pegs[0], &pegs[5]);
        cache.get_or_compute(&pegs[3], &pegs[5]);
        // one row of six slots, not the full 1600-peg table
        assert_eq!(cache.allocated_slots(), 6);
        assert_eq!(cache.rasterized(), 2);
        assert!(cache.get(5, 0).is_some());
        assert!(cache.get(1, 5).is_none());
    }
}
