//! GUID helpers for client-created entities.

use uuid::Uuid;

/// Generates a fresh random GUID string (UUID v4, hyphenated lowercase).
///
/// GUIDs are opaque to the model; any unique string works. This is only a
/// convenience for callers that create entities locally.
pub fn new_guid() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::new_guid;

    #[test]
    fn generated_guids_are_distinct_and_hyphenated() {
        let first = new_guid();
        let second = new_guid();
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
        assert_eq!(first.matches('-').count(), 4);
    }
}
