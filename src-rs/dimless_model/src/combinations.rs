/// Iterator over the `k`-element index subsets of `0..n` in lexicographic
/// order.
///
/// # Examples
///
/// ```rust
/// use dimless_model::Combinations;
///
/// let subsets: Vec<Vec<usize>> = Combinations::new(4, 3).collect();
/// assert_eq!(
///     subsets,
///     vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Creates an iterator over the `k`-element subsets of `0..n`
    ///
    /// There is exactly one empty subset when `k` is zero, and none when `k`
    /// exceeds `n`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.indices.clone();
        let k = self.indices.len();

        // find the rightmost index that can still move right
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_zero_yields_one_empty_subset() {
        let subsets: Vec<_> = Combinations::new(3, 0).collect();

        assert_eq!(subsets, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn choose_more_than_available_yields_nothing() {
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }

    #[test]
    fn choose_all_yields_one_subset() {
        let subsets: Vec<_> = Combinations::new(3, 3).collect();

        assert_eq!(subsets, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn count_matches_binomial_coefficient() {
        assert_eq!(Combinations::new(6, 2).count(), 15);
        assert_eq!(Combinations::new(7, 3).count(), 35);
    }

    #[test]
    fn order_is_lexicographic() {
        let subsets: Vec<_> = Combinations::new(4, 2).collect();

        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }
}
