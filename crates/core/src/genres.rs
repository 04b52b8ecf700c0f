//! Genre tag normalization.
//!
//! Genres are free-text tags stored as a `TEXT[]` column. Input arrives as
//! a multi-valued form field, so it is cleaned up before it reaches the
//! database.

/// Trim each genre, drop blanks, and remove exact duplicates while keeping
/// the first occurrence's position.
pub fn normalize_genres(genres: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(genres.len());
    for genre in genres {
        let trimmed = genre.trim();
        if trimmed.is_empty() || out.iter().any(|g| g == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trims_and_drops_blank_entries() {
        let input = owned(&["  Jazz ", "", "   ", "Folk"]);
        assert_eq!(normalize_genres(&input), owned(&["Jazz", "Folk"]));
    }

    #[test]
    fn removes_duplicates_keeping_first_position() {
        let input = owned(&["Rock n Roll", "Jazz", "Rock n Roll ", "Classical"]);
        assert_eq!(
            normalize_genres(&input),
            owned(&["Rock n Roll", "Jazz", "Classical"])
        );
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        let input = owned(&["Hip-Hop", "hip-hop"]);
        assert_eq!(normalize_genres(&input), owned(&["Hip-Hop", "hip-hop"]));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(normalize_genres(&[]).is_empty());
    }
}
