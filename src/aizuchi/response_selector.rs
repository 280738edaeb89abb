use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one canned acknowledgment per call, regardless of what was said.
///
/// The phrase list is fixed at construction and only ever read afterwards,
/// so clones share it freely across threads.
#[derive(Clone, Debug)]
pub struct ResponseSelector(Arc<[&'static str]>);

impl ResponseSelector {
    pub fn new() -> Self {
        Self::with_phrases(make_aizuchi_phrases())
    }

    /// `phrases` must not be empty, picking from an empty list panics.
    pub fn with_phrases(phrases: Vec<&'static str>) -> Self {
        ResponseSelector(phrases.into())
    }

    pub fn pick(&self, _input: &str) -> &'static str {
        self.pick_with(&mut rand::thread_rng())
    }

    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        *self.0.choose(rng).expect("phrase list is never empty")
    }

    pub fn phrases(&self) -> &[&'static str] {
        &self.0
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

fn make_aizuchi_phrases() -> Vec<&'static str> {
    vec![
        "なるほど、それは興味深いですね。",
        "確かに、その通りだと思います。",
        "そうなんですね、理解できました。",
        "面白い視点ですね。",
        "それについてもっと教えてください。",
        "素晴らしい考えですね。",
        "そうですか、それは知りませんでした。",
        "なるほど、参考になります。",
        "それは良いアイデアですね。",
        "確かに、そう考えると納得できます。",
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const N: usize = 1_000;

    #[test]
    fn reference_list_has_ten_non_empty_phrases() {
        let selector = ResponseSelector::new();
        assert_eq!(selector.phrases().len(), 10);
        assert!(selector.phrases().iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn pick_returns_known_phrase() {
        let selector = ResponseSelector::new();
        let response = selector.pick("こんにちは");
        assert!(selector.phrases().contains(&response));
    }

    #[test]
    fn pick_accepts_empty_input() {
        let selector = ResponseSelector::new();
        let response = selector.pick("");
        assert!(!response.is_empty());
        assert!(selector.phrases().contains(&response));
    }

    #[test]
    fn pick_is_not_constant() {
        let selector = ResponseSelector::new();
        let seen: HashSet<_> = (0..N).map(|_| selector.pick("こんにちは")).collect();
        assert!(seen.len() >= 2, "only saw {seen:?}");
    }

    #[test]
    fn phrases_untouched_by_picking() {
        let selector = ResponseSelector::new();
        let before = selector.phrases().to_vec();
        for _ in 0..N {
            selector.pick("テスト");
        }
        assert_eq!(selector.phrases(), before.as_slice());
    }

    #[test]
    fn custom_phrase_list() {
        let selector = ResponseSelector::with_phrases(vec!["uh-huh", "right"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..N {
            let response = selector.pick_with(&mut rng);
            assert!(response == "uh-huh" || response == "right");
        }
    }

    #[test]
    fn single_phrase_always_wins() {
        let selector = ResponseSelector::with_phrases(vec!["hm"]);
        assert!((0..N).all(|_| selector.pick("anything") == "hm"));
    }

    #[test]
    fn every_phrase_gets_picked() {
        let selector = ResponseSelector::new();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<_> = (0..N).map(|_| selector.pick_with(&mut rng)).collect();
        assert_eq!(seen.len(), selector.phrases().len());
    }

    #[test]
    #[should_panic]
    fn empty_phrase_list_panics_on_pick() {
        ResponseSelector::with_phrases(vec![]).pick("hello");
    }
}
