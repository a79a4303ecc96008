use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 13;
const DEFAULT_EXTENSION: &str = "jpg";

static EXTENSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]{1,5}$").expect("extension pattern is valid"));

/// Builds a collision-resistant object name for an uploaded photo:
/// `food_{unix_millis}_{random}.{ext}`.
pub fn generate_image_file_name<R: Rng + ?Sized>(
    original_name: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();

    format!(
        "food_{}_{}.{}",
        now.timestamp_millis(),
        suffix,
        image_extension(original_name)
    )
}

fn image_extension(original_name: &str) -> String {
    let Some((_, ext)) = original_name.rsplit_once('.') else {
        return DEFAULT_EXTENSION.to_string();
    };
    let ext = ext.to_ascii_lowercase();

    if EXTENSION_PATTERN.is_match(&ext) {
        ext
    } else {
        DEFAULT_EXTENSION.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn should_build_name_from_timestamp_suffix_and_extension() {
        let mut rng = StdRng::seed_from_u64(7);

        let name = generate_image_file_name("IMG_0042.JPEG", fixed_now(), &mut rng);

        let parts: Vec<&str> = name.split(['_', '.']).collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "food");
        assert_eq!(parts[1], "1704067200000");
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(
            parts[2]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
        assert_eq!(parts[3], "jpeg");
    }

    #[test]
    fn should_default_to_jpg_when_extension_is_unusable() {
        let mut rng = StdRng::seed_from_u64(1);

        for original in ["photo", "photo.", "archive.tar.verylong", "weird.p?g"] {
            let name = generate_image_file_name(original, fixed_now(), &mut rng);
            assert!(name.ends_with(".jpg"), "{original} -> {name}");
        }
    }

    #[test]
    fn should_accept_short_alphanumeric_extensions_only() {
        assert_eq!(image_extension("scan.webp"), "webp");
        assert_eq!(image_extension("raw.HEIC"), "heic");
        assert_eq!(image_extension("clip.mp4"), "mp4");
        assert_eq!(image_extension("notes.abcdef"), DEFAULT_EXTENSION);
        assert_eq!(image_extension("odd.j-g"), DEFAULT_EXTENSION);
    }

    #[test]
    fn should_keep_last_extension_of_dotted_names() {
        let mut rng = StdRng::seed_from_u64(3);

        let name = generate_image_file_name("my.lunch.png", fixed_now(), &mut rng);

        assert!(name.ends_with(".png"));
    }

    #[test]
    fn should_generate_distinct_names_for_same_instant() {
        let mut rng = StdRng::seed_from_u64(11);

        let first = generate_image_file_name("a.jpg", fixed_now(), &mut rng);
        let second = generate_image_file_name("a.jpg", fixed_now(), &mut rng);

        assert_ne!(first, second);
    }
}
