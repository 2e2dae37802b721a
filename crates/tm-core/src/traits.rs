//! Core traits shared by catalog records

/// Records with a unique string identifier
pub trait Identifiable {
    fn id(&self) -> &str;

    /// Exact identifier match
    fn has_id(&self, id: &str) -> bool {
        self.id() == id
    }

    /// Case-insensitive identifier match
    fn has_id_ignore_case(&self, id: &str) -> bool {
        eq_ignore_case(self.id(), id)
    }
}

/// Records with a display name
pub trait Named {
    fn name(&self) -> &str;
}

/// Base trait for catalog entities
pub trait Entity: Identifiable + Named + Send + Sync {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}

/// Unicode-aware case-insensitive equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring test; an empty needle always matches
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing(&'static str);

    impl Identifiable for Thing {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_id_matching() {
        let thing = Thing("Club-Brugge");
        assert!(thing.has_id("Club-Brugge"));
        assert!(!thing.has_id("club-brugge"));
        assert!(thing.has_id_ignore_case("club-brugge"));
        assert!(!thing.has_id_ignore_case("anderlecht"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Cristiano Ronaldo", "RONALDO"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Messi", "ro"));
        assert!(contains_ignore_case("Ödegaard", "öde"));
    }
}
