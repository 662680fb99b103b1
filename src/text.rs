//! Text helpers shared by the three scorers: lowercase tokenization, length-filtered
//! keyword extraction and the small display formatters (title case, percent, USD).

/// Whitespace tokens of `s`, lowercased, keeping only those with more than `min_len` chars.
pub fn tokens_longer_than(s: &str, min_len: usize) -> impl Iterator<Item = String> + '_ {
    s.split_whitespace()
        .map(|t| t.to_lowercase())
        .filter(move |t| t.chars().count() > min_len)
}

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if any of `keywords` occurs in `text` (which must already be lowercase).
pub fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// "louis vuitton" -> "Louis Vuitton". Letters following a non-letter start a new word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// 0.873 -> "87%"
pub fn percent(x: f64) -> String {
    format!("{:.0}%", x * 100.0)
}

/// 5500 -> "$5,500"
pub fn format_usd(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tokens_are_dropped() {
        let t: Vec<_> = tokens_longer_than("The Classic Flap Bag of mine", 2).collect();
        assert_eq!(t, vec!["the", "classic", "flap", "bag", "mine"]);

        let t: Vec<_> = tokens_longer_than("Chanel Boy Bag", 3).collect();
        assert_eq!(t, vec!["chanel"]);
    }

    #[test]
    fn title_case_matches_display_names() {
        assert_eq!(title_case("louis vuitton"), "Louis Vuitton");
        assert_eq!(title_case("HERMES"), "Hermes");
        assert_eq!(title_case("dolce&gabbana"), "Dolce&Gabbana");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn usd_has_thousands_separators() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(700), "$700");
        assert_eq!(format_usd(5500), "$5,500");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn percent_rounds_to_whole() {
        assert_eq!(percent(0.873), "87%");
        assert_eq!(percent(0.99), "99%");
        assert_eq!(percent(0.1), "10%");
    }

    #[test]
    fn case_insensitive_contains() {
        assert!(contains_ci("Black lambskin, Gold Hardware", "gold hardware"));
        assert!(!contains_ci("Black lambskin", "caviar"));
    }
}
