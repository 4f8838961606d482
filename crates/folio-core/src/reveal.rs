/// One-shot reveal bookkeeping for the fade-in observer.
///
/// Each observed element gets a key from [`RevealTracker::observe`]. The first
/// intersecting entry for a key reveals it; later entries, intersecting or not,
/// never change it back.
#[derive(Debug, Default, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new element and return its key
    pub fn observe(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Record an intersection entry. Returns true only when the element must be
    /// revealed now.
    pub fn intersect(&mut self, key: usize, is_intersecting: bool) -> bool {
        match self.revealed.get_mut(key) {
            Some(revealed) if is_intersecting && !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, key: usize) -> bool {
        self.revealed.get(key).copied().unwrap_or(false)
    }

    /// Number of observed elements not yet revealed
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|revealed| !**revealed).count()
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
