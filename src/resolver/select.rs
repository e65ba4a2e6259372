//! One-shot random selection over the candidate list.

use crate::config::{ConfigurationError, HostEntry};
use crate::resolver::IndexSource;

/// Pick one candidate uniformly by index.
pub fn select_random<'a>(
    candidates: &'a [HostEntry],
    source: &mut dyn IndexSource,
) -> Result<&'a HostEntry, ConfigurationError> {
    let index = select_index(candidates.len(), source)?;
    Ok(&candidates[index])
}

/// Draw an index into a list of `len` candidates.
pub(crate) fn select_index(
    len: usize,
    source: &mut dyn IndexSource,
) -> Result<usize, ConfigurationError> {
    if len == 0 {
        return Err(ConfigurationError::NoCandidates);
    }
    Ok(source.next_index(len) % len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{FixedSequence, ThreadRandom};

    fn hosts() -> Vec<HostEntry> {
        vec![
            HostEntry::new("https", "a.test"),
            HostEntry::new("http", "b.test:8080"),
            HostEntry::new("https", "c.test"),
        ]
    }

    #[test]
    fn test_fixed_index_selects_entry() {
        let candidates = hosts();
        let mut source = FixedSequence::new(vec![1]);
        let selected = select_random(&candidates, &mut source).unwrap();
        assert_eq!(selected, &candidates[1]);
    }

    #[test]
    fn test_out_of_range_index_wraps() {
        let candidates = hosts();
        let mut source = FixedSequence::new(vec![7]);
        let selected = select_random(&candidates, &mut source).unwrap();
        assert_eq!(selected, &candidates[1]);
    }

    #[test]
    fn test_single_candidate_always_selected() {
        let candidates = vec![HostEntry::new("https", "only.test")];
        let mut source = ThreadRandom::new();
        for _ in 0..100 {
            assert_eq!(select_random(&candidates, &mut source).unwrap(), &candidates[0]);
        }
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let mut source = ThreadRandom::new();
        let err = select_random(&[], &mut source).unwrap_err();
        assert!(matches!(err, ConfigurationError::NoCandidates));
    }

    #[test]
    fn test_every_candidate_reachable() {
        let candidates = hosts();
        let mut source = ThreadRandom::new();
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let selected = select_random(&candidates, &mut source).unwrap();
            let index = candidates.iter().position(|c| c == selected).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
