//! Ranked prediction lists and the reinforcement rule.
//!
//! A list is kept sorted by weight descending after every mutation.
//! Sorting is stable, so records of equal weight keep their prior
//! relative order and a newly appended word ranks after older ties.

/// One candidate word and its unnormalized popularity score.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub word: String,
    pub weight: f64,
}

impl PredictionRecord {
    pub fn new(word: impl Into<String>, weight: f64) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }
}

/// The ranked predictions stored under one context key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionList {
    records: Vec<PredictionRecord>,
}

impl PredictionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from records in any order; the result is ranked.
    pub fn from_records(records: Vec<PredictionRecord>) -> Self {
        let mut list = Self { records };
        list.rank();
        list
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    /// Words in rank order.
    pub fn words(&self) -> Vec<String> {
        self.records.iter().map(|r| r.word.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all weights in the list.
    pub fn total_weight(&self) -> f64 {
        self.records.iter().map(|r| r.weight).sum()
    }

    pub fn weight_of(&self, word: &str) -> Option<f64> {
        self.records.iter().find(|r| r.word == word).map(|r| r.weight)
    }

    /// Zero-based rank of `word`, 0 being the heaviest.
    pub fn rank_of(&self, word: &str) -> Option<usize> {
        self.records.iter().position(|r| r.word == word)
    }

    /// Reinforce `word` by `1 / (total + 1)`, appending it if absent.
    ///
    /// On an empty list this yields weight exactly 1.0, which is the
    /// bootstrap case for a previously unseen key.
    pub fn reinforce(&mut self, word: &str) {
        let increment = 1.0 / (self.total_weight() + 1.0);
        match self.records.iter_mut().find(|r| r.word == word) {
            Some(record) => record.weight += increment,
            None => self.records.push(PredictionRecord::new(word, increment)),
        }
        self.rank();
    }

    /// Remove every record for `word`. Returns whether anything was removed.
    pub fn remove(&mut self, word: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.word != word);
        self.rank();
        self.records.len() != before
    }

    fn rank(&mut self) {
        self.records.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_weight_is_one() {
        let mut list = PredictionList::new();
        list.reinforce("世界");
        assert_eq!(list.records(), &[PredictionRecord::new("世界", 1.0)]);
    }

    #[test]
    fn reinforcement_follows_total_weight() {
        let mut list = PredictionList::new();
        list.reinforce("a");
        list.reinforce("b");
        // total was 1.0 when "b" arrived.
        assert_eq!(list.weight_of("b"), Some(0.5));
        list.reinforce("b");
        // total 1.5 -> increment 0.4
        assert_eq!(list.weight_of("b"), Some(0.5 + 1.0 / 2.5));
        assert_eq!(list.words(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn overtaking_reorders() {
        let mut list = PredictionList::new();
        list.reinforce("a");
        for _ in 0..5 {
            list.reinforce("b");
        }
        assert_eq!(list.rank_of("b"), Some(0));
        assert_eq!(list.rank_of("a"), Some(1));
    }

    #[test]
    fn ties_keep_prior_order() {
        let list = PredictionList::from_records(vec![
            PredictionRecord::new("x", 0.5),
            PredictionRecord::new("y", 0.5),
            PredictionRecord::new("z", 0.9),
        ]);
        assert_eq!(list.words(), vec!["z", "x", "y"]);
    }

    #[test]
    fn remove_absent_word_is_noop() {
        let mut list = PredictionList::from_records(vec![PredictionRecord::new("a", 1.0)]);
        let before = list.clone();
        assert!(!list.remove("missing"));
        assert_eq!(list, before);
    }

    #[test]
    fn remove_can_empty_the_list() {
        let mut list = PredictionList::new();
        list.reinforce("only");
        assert!(list.remove("only"));
        assert!(list.is_empty());
    }
}
