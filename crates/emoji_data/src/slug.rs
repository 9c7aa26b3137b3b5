use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Applied in order, and only to the first occurrence of each
const REPLACEMENTS: &[(&str, &str)] = &[("*", "asterisk"), ("#", "number sign")];

static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.+\)").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Za-z]+").unwrap());

/// Returns a machine readable short code for an emoji or group description
///
/// ```text
/// 'flag: St. Kitts & Nevis'     -> 'flag_st_kitts_nevis'
/// 'family: woman, woman, boy'   -> 'family_woman_woman_boy'
/// 'A button (blood type)'       -> 'a_button'
/// 'Cocos (Keeling) Islands'     -> 'cocos_islands'
/// 'keycap *'                    -> 'keycap_asterisk'
/// ```
pub fn slugify(text: &str) -> String {
    let mut text = text.to_owned();

    for &(from, to) in REPLACEMENTS {
        text = text.replacen(from, to, 1);
    }

    // strip diacritics, 'piñata' -> 'pinata'
    let text: String = text.nfd().filter(|&c| !matches!(c, '\u{0300}'..='\u{036F}')).collect();

    let text = PARENTHESIZED.replace_all(&text, "");

    NON_WORD.replace_all(text.trim(), "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("flag: St. Kitts & Nevis"), "flag_st_kitts_nevis");
        assert_eq!(slugify("family: woman, woman, boy, boy"), "family_woman_woman_boy_boy");
        assert_eq!(slugify("A button (blood type)"), "a_button");
        assert_eq!(slugify("Cocos (Keeling) Islands"), "cocos_islands");
        assert_eq!(slugify("keycap *"), "keycap_asterisk");
        assert_eq!(slugify("keycap #"), "keycap_number_sign");
        assert_eq!(slugify("Smileys & Emotion"), "smileys_emotion");
    }

    #[test]
    fn test_slugify_diacritics() {
        assert_eq!(slugify("piñata"), "pinata");
        assert_eq!(slugify("flag: Curaçao"), "flag_curacao");
        assert_eq!(slugify("flag: São Tomé & Príncipe"), "flag_sao_tome_principe");
    }

    #[test]
    fn test_slugify_first_occurrence_only() {
        assert_eq!(slugify("* and *"), "asterisk_and_");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        for s in [
            "flag: St. Kitts & Nevis",
            "keycap *",
            "Japanese “here” button",
            "squared UP!",
            "woman’s hat",
            "A button (blood type)",
            "  leading and trailing  ",
            "flag: Åland Islands",
        ] {
            let once = slugify(s);
            assert_eq!(slugify(&once), once, "{s}");
        }
    }
}
