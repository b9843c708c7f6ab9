//! Random plausible book data for pre-filling the create form.
//! Purely in-memory; never touches the store.

use rand::Rng;

use super::models::BookFields;

const TITLE_HEADS: &[&str] = &[
    "The Silent", "Beyond the", "Echoes of", "The Last", "Shadows of", "A Theory of",
    "The Clockwork", "Whispers from", "The Glass", "Children of",
];

const TITLE_TAILS: &[&str] = &[
    "Horizon", "Stars", "Tomorrow", "Kingdom", "Machine", "Tide", "Library", "Winter",
    "Cartographer", "Lantern",
];

const FIRST_NAMES: &[&str] = &[
    "Eleanor", "Marcus", "Samantha", "Jonathan", "Victoria", "Daniel", "Isabella", "Richard",
];

const LAST_NAMES: &[&str] = &[
    "Carter", "Ellison", "Green", "Wells", "Hayes", "Roberts", "Monroe", "Thompson",
];

const PUBLISHERS: &[&str] = &[
    "Nightfall Press", "Galactic Reads", "Heritage Publishing", "TechFuture Books",
    "Empire Stories", "BlueWave Publishing",
];

/// Compose a random book: title, author, publisher, ISO date, and a
/// website URL derived from the title.
pub fn book_fields() -> BookFields {
    let mut rng = rand::thread_rng();

    let head = TITLE_HEADS[rng.gen_range(0..TITLE_HEADS.len())];
    let tail = TITLE_TAILS[rng.gen_range(0..TITLE_TAILS.len())];
    let title = format!("{head} {tail}");

    let author = format!(
        "{} {}",
        FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
        LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())],
    );

    let publisher = PUBLISHERS[rng.gen_range(0..PUBLISHERS.len())].to_string();

    let date = format!(
        "{:04}-{:02}-{:02}",
        rng.gen_range(1990..=2024),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
    );

    let website = format!("https://{}.example.com/{}", slug(&publisher), slug(&title));

    BookFields {
        title,
        author,
        publisher,
        date,
        website,
    }
}

fn slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_fields_are_all_populated() {
        let fields = book_fields();
        assert!(!fields.title.trim().is_empty());
        assert!(!fields.author.trim().is_empty());
        assert!(!fields.publisher.trim().is_empty());
        assert!(!fields.date.trim().is_empty());
        assert!(fields.website.starts_with("https://"));
    }

    #[test]
    fn sample_date_is_iso_shaped() {
        let fields = book_fields();
        let parts: Vec<&str> = fields.date.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
    }

    #[test]
    fn slug_strips_non_alphanumerics() {
        assert_eq!(slug("Nightfall Press"), "nightfall-press");
    }
}
