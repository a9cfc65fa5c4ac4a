/// Iterator over all `K`-element index combinations of `0..n`, in lexicographic order.
///
/// Used to enumerate every five-card hand out of a 5..=7 card pool
/// (C(5,5) = 1, C(6,5) = 6, C(7,5) = 21).
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    done: bool,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0usize; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { n, indices, done: K == 0 || n < K }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Bump the rightmost index that still has room, then pack everything after it.
        let mut i = K - 1;
        loop {
            if self.indices[i] < self.n - (K - i) {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}
