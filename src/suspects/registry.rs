/// Bucket count for the suspect table.
pub const BUCKETS: usize = 31;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suspect {
    pub name: String,
    /// Distinct clues pointing at this suspect, newest first.
    pub clues: Vec<String>,
}

impl Suspect {
    fn new(name: &str) -> Self {
        Suspect {
            name: name.to_string(),
            clues: Vec::new(),
        }
    }

    /// Number of distinct clues citing this suspect.
    pub fn citations(&self) -> usize {
        self.clues.len()
    }

    pub fn is_cited_by(&self, clue: &str) -> bool {
        self.clues.iter().any(|c| c == clue)
    }
}

/// Result of asking for the most cited suspect.
#[derive(Debug, PartialEq, Eq)]
pub enum TopSuspect<'a> {
    /// Nobody has been named yet.
    NoSuspects,
    /// Suspects exist but none has a citation.
    NoCitations,
    Leading(&'a Suspect),
}

/// Suspects keyed by name in a fixed array of chained buckets.
#[derive(Debug)]
pub struct SuspectRegistry {
    buckets: Vec<Vec<Suspect>>,
    len: usize,
}

impl Default for SuspectRegistry {
    fn default() -> Self {
        SuspectRegistry {
            buckets: vec![Vec::new(); BUCKETS],
            len: 0,
        }
    }
}

/// Multiplicative byte hash folded into the bucket range.
pub fn bucket_index(name: &str) -> usize {
    let hash = name
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(131).wrapping_add(u32::from(b)));
    hash as usize % BUCKETS
}

impl SuspectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, name: &str) -> Option<&Suspect> {
        self.buckets[bucket_index(name)]
            .iter()
            .find(|s| s.name == name)
    }

    /// Returns the entry for `name`, creating an uncited one if needed.
    pub fn find_or_create(&mut self, name: &str) -> &mut Suspect {
        let chain = &mut self.buckets[bucket_index(name)];
        // Chains are kept head-first: new entries go to index 0.
        match chain.iter().position(|s| s.name == name) {
            Some(pos) => &mut chain[pos],
            None => {
                tracing::debug!(suspect = name, "suspect registered");
                chain.insert(0, Suspect::new(name));
                self.len += 1;
                &mut chain[0]
            }
        }
    }

    /// Links `clue` to `name`. Repeating a pair changes nothing.
    /// Returns `true` when a new citation was recorded.
    pub fn associate(&mut self, clue: &str, name: &str) -> bool {
        let suspect = self.find_or_create(name);
        if suspect.is_cited_by(clue) {
            return false;
        }
        suspect.clues.insert(0, clue.to_string());
        tracing::debug!(
            suspect = name,
            clue,
            citations = suspect.citations(),
            "citation recorded"
        );
        true
    }

    /// Every suspect, bucket by bucket, each chain from its head.
    pub fn iter(&self) -> impl Iterator<Item = &Suspect> {
        self.buckets.iter().flatten()
    }

    /// The first suspect, in iteration order, with the highest citation count.
    pub fn top_suspect(&self) -> TopSuspect<'_> {
        let mut best: Option<&Suspect> = None;
        for suspect in self.iter() {
            if best.map_or(true, |b| suspect.citations() > b.citations()) {
                best = Some(suspect);
            }
        }
        match best {
            None => TopSuspect::NoSuspects,
            Some(s) if s.citations() == 0 => TopSuspect::NoCitations,
            Some(s) => TopSuspect::Leading(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_in_bucket_order(registry: &SuspectRegistry) -> Vec<&str> {
        registry.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn bucket_index_is_stable_and_in_range() {
        for name in ["Mordomo", "Jardineiro", "Cozinheira", "", "Governanta"] {
            let idx = bucket_index(name);
            assert!(idx < BUCKETS);
            assert_eq!(idx, bucket_index(name));
        }
        assert_eq!(bucket_index(""), 0);
        assert_eq!(bucket_index("A"), 65 % BUCKETS);
    }

    #[test]
    fn find_or_create_reuses_existing_entry() {
        let mut registry = SuspectRegistry::new();
        registry.find_or_create("Mordomo");
        registry.find_or_create("Mordomo");
        assert_eq!(registry.len(), 1);

        let mordomo = registry.get("Mordomo").unwrap();
        assert_eq!(mordomo.citations(), 0);
        assert!(mordomo.clues.is_empty());
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut registry = SuspectRegistry::new();
        registry.find_or_create("mordomo");
        registry.find_or_create("Mordomo");
        assert_eq!(registry.len(), 2);
        assert!(registry.get("MORDOMO").is_none());
    }

    #[test]
    fn associate_is_idempotent() {
        let mut once = SuspectRegistry::new();
        assert!(once.associate("chave dourada", "Mordomo"));

        let mut twice = SuspectRegistry::new();
        twice.associate("chave dourada", "Mordomo");
        assert!(!twice.associate("chave dourada", "Mordomo"));

        assert_eq!(once.get("Mordomo"), twice.get("Mordomo"));
        assert_eq!(twice.get("Mordomo").unwrap().citations(), 1);
    }

    #[test]
    fn citations_track_distinct_clues() {
        let mut registry = SuspectRegistry::new();
        let pairs = [
            ("chave dourada", "Mordomo"),
            ("luva rasgada", "Mordomo"),
            ("chave dourada", "Mordomo"),
            ("luva rasgada", "Jardineiro"),
            ("veneno", "Cozinheira"),
            ("veneno", "Mordomo"),
        ];
        for (clue, name) in pairs {
            registry.associate(clue, name);
        }

        for suspect in registry.iter() {
            let mut distinct = suspect.clues.clone();
            distinct.sort();
            distinct.dedup();
            assert_eq!(suspect.citations(), distinct.len());
        }
        assert_eq!(registry.get("Mordomo").unwrap().citations(), 3);
        assert_eq!(registry.get("Jardineiro").unwrap().citations(), 1);
    }

    #[test]
    fn colliding_names_share_a_bucket() {
        // Single bytes 31 apart land in the same bucket.
        assert_eq!(bucket_index("A"), bucket_index("`"));

        let mut registry = SuspectRegistry::new();
        registry.associate("pista", "A");
        registry.associate("pista", "`");
        assert_eq!(registry.len(), 2);
        // Newest entry sits at the head of the chain.
        assert_eq!(names_in_bucket_order(&registry), vec!["`", "A"]);
    }

    #[test]
    fn top_suspect_on_empty_registry() {
        let registry = SuspectRegistry::new();
        assert_eq!(registry.top_suspect(), TopSuspect::NoSuspects);
    }

    #[test]
    fn top_suspect_with_only_uncited_entries() {
        let mut registry = SuspectRegistry::new();
        registry.find_or_create("Mordomo");
        registry.find_or_create("Jardineiro");
        assert_eq!(registry.top_suspect(), TopSuspect::NoCitations);
    }

    #[test]
    fn top_suspect_picks_highest_count() {
        let mut registry = SuspectRegistry::new();
        registry.associate("chave dourada", "Jardineiro");
        registry.associate("chave dourada", "Mordomo");
        registry.associate("veneno", "Mordomo");

        match registry.top_suspect() {
            TopSuspect::Leading(s) => {
                assert_eq!(s.name, "Mordomo");
                assert_eq!(s.citations(), 2);
            }
            other => panic!("expected a leading suspect, got {other:?}"),
        }
    }

    #[test]
    fn top_suspect_tie_goes_to_first_in_iteration_order() {
        let mut registry = SuspectRegistry::new();
        registry.associate("chave dourada", "Mordomo");
        registry.associate("chave dourada", "Jardineiro");

        let first = names_in_bucket_order(&registry)[0].to_string();
        match registry.top_suspect() {
            TopSuspect::Leading(s) => assert_eq!(s.name, first),
            other => panic!("expected a leading suspect, got {other:?}"),
        }
    }
}
