//! Segment derivation strategies.
//!
//! A [`Segmenter`] turns a stored value into the ordered sequence of
//! segments which addresses it in a [`crate::trie::Trie`]. It also decides
//! when two values are the same value, which is what `contains`, `get`
//! and `remove` use once they have located a node.
//!
//! Any closure `Fn(&V) -> Vec<S>` is a segmenter which compares values
//! with `PartialEq`:
//! ```
//! use segtrie::trie::Trie;
//!
//! let mut trie = Trie::new(|n: &u32| n.to_be_bytes().to_vec());
//! trie.put(258);
//! assert!(trie.contains(&258));
//! ```
//!
//! Implement the trait directly when the equality method should be
//! looser (or stricter) than `PartialEq`:
//! ```
//! use segtrie::segment::Segmenter;
//! use segtrie::trie::Trie;
//!
//! struct CaseInsensitive;
//!
//! impl Segmenter<String> for CaseInsensitive {
//!     type Segment = char;
//!
//!     fn segments(&self, value: &String) -> Vec<char> {
//!         value.chars().flat_map(char::to_lowercase).collect()
//!     }
//!
//!     fn equivalent(&self, a: &String, b: &String) -> bool {
//!         a.eq_ignore_ascii_case(b)
//!     }
//! }
//!
//! let mut trie = Trie::new(CaseInsensitive);
//! trie.put("Hello".to_string());
//! assert!(trie.contains(&"hELLO".to_string()));
//! ```

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Segments which we wish to use as trie edges must implement
/// TrieSegment.
pub trait TrieSegment: Clone + PartialEq + fmt::Debug {}

// Blanket implementation which satisfies the compiler
impl<S> TrieSegment for S
where
    S: Clone + PartialEq + fmt::Debug,
{
    // Nothing to implement, since S already supports the other traits.
}

/// Derives the segment path of a value and decides value equivalence.
///
/// `segments` must be deterministic: equivalent values must always yield
/// the same sequence.
pub trait Segmenter<V: ?Sized> {
    /// One edge of a path.
    type Segment: TrieSegment;

    /// The path addressing `value`, root first.
    fn segments(&self, value: &V) -> Vec<Self::Segment>;

    /// The equality method applied to a query and a stored value.
    fn equivalent(&self, a: &V, b: &V) -> bool;
}

impl<V, S, F> Segmenter<V> for F
where
    F: Fn(&V) -> Vec<S>,
    V: PartialEq,
    S: TrieSegment,
{
    type Segment = S;

    fn segments(&self, value: &V) -> Vec<S> {
        self(value)
    }

    fn equivalent(&self, a: &V, b: &V) -> bool {
        a == b
    }
}

/// One segment per `char`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chars;

impl<T: AsRef<str> + PartialEq> Segmenter<T> for Chars {
    type Segment = char;

    fn segments(&self, value: &T) -> Vec<char> {
        value.as_ref().chars().collect()
    }

    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// One segment per extended grapheme cluster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Graphemes;

impl<T: AsRef<str> + PartialEq> Segmenter<T> for Graphemes {
    type Segment = String;

    fn segments(&self, value: &T) -> Vec<String> {
        value.as_ref().graphemes(true).map(str::to_owned).collect()
    }

    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// One segment per delimited component, e.g. the parts of a path or a
/// dotted name. Empty components are kept, so `"a//b"` and `"a/b"` have
/// different paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split {
    delimiter: char,
}

impl Split {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl Default for Split {
    fn default() -> Self {
        Self::new('/')
    }
}

impl<T: AsRef<str> + PartialEq> Segmenter<T> for Split {
    type Segment = String;

    fn segments(&self, value: &T) -> Vec<String> {
        let value = value.as_ref();
        if value.is_empty() {
            return vec![];
        }
        value.split(self.delimiter).map(str::to_owned).collect()
    }

    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_segments_chars() {
        assert_eq!(vec!['c', 'a', 't'], Chars.segments(&"cat"));
        assert!(Segmenter::<String>::segments(&Chars, &String::new()).is_empty());
    }

    #[test]
    fn it_segments_grapheme_clusters() {
        let segments = Graphemes.segments(&"a̐éö̲\r\n");
        assert_eq!(vec!["a̐", "é", "ö̲", "\r\n"], segments);
    }

    #[test]
    fn it_keeps_empty_components() {
        let split = Split::default();
        assert_eq!(vec!["usr", "", "bin"], split.segments(&"usr//bin"));
        assert_eq!(vec!["", "etc"], split.segments(&"/etc"));
        assert!(split.segments(&"").is_empty());
        assert_eq!(vec!["a", "b"], Split::new('.').segments(&"a.b"));
    }

    #[test]
    fn it_uses_closures_as_segmenters() {
        let by_digit = |n: &u32| n.to_string().chars().collect::<Vec<char>>();
        assert_eq!(vec!['4', '2'], by_digit.segments(&42));
        assert!(by_digit.equivalent(&42, &42));
        assert!(!by_digit.equivalent(&42, &24));
    }
}
