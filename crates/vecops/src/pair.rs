//! Results of min/max queries.

/// A component value together with its position in the vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexValuePair<S> {
    pub value: S,
    pub index: usize,
}

/// A component value together with the caller-chosen key it was addressed
/// by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyValuePair<K, S> {
    pub value: S,
    pub key: K,
}

impl<S> IndexValuePair<S> {
    pub const fn new(value: S, index: usize) -> Self {
        IndexValuePair { value, index }
    }

    /// Replaces the position with the matching entry of `keys`. The pair
    /// must come from an `N` component vector, so `index < N`.
    pub(crate) fn with_key<K: Copy, const N: usize>(self, keys: [K; N]) -> KeyValuePair<K, S> {
        KeyValuePair {
            value: self.value,
            key: keys[self.index],
        }
    }
}

impl<K, S> KeyValuePair<K, S> {
    pub const fn new(value: S, key: K) -> Self {
        KeyValuePair { value, key }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sanity_with_key() {
        let pair = IndexValuePair::new(2.0f64, 1);
        assert_eq!(KeyValuePair::new(2.0, "y"), pair.with_key(["x", "y"]));
        let last = IndexValuePair::new(-1.0f32, 2);
        assert_eq!(KeyValuePair::new(-1.0, 'z'), last.with_key(['x', 'y', 'z']));
    }
}
