//! Arabic text canonicalization for comparison.
//!
//! Speech recognizers routinely omit or hallucinate diacritics and
//! conflate visually similar letter forms; comparing raw transcript
//! text against the reference would score orthography instead of
//! recitation. Normalized forms are comparison keys only and are never
//! surfaced to the caller.

/// Fathatan, dammatan, kasratan, fatha, damma, kasra, shadda, sukun.
const TASHKEEL: [char; 8] = [
    '\u{064B}', '\u{064C}', '\u{064D}', '\u{064E}', '\u{064F}', '\u{0650}', '\u{0651}', '\u{0652}',
];

/// Canonicalize Arabic text for comparison. Total over all inputs,
/// idempotent, and a graceful no-op for non-Arabic script apart from
/// trimming and lowercasing.
pub fn normalize_arabic(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|c| !TASHKEEL.contains(c))
        .map(|c| match c {
            // Hamza-bearing alef variants and alef madda.
            'أ' | 'إ' | 'آ' => 'ا',
            // Alef maksura and Farsi yeh both read as ya.
            'ى' | 'ی' => 'ي',
            // Ta marbuta to ha, a common recognizer confusion on the
            // feminine ending.
            'ة' => 'ه',
            other => other,
        })
        .collect();
    folded.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tashkeel() {
        assert_eq!(normalize_arabic("بِسْمِ"), "بسم");
        assert_eq!(normalize_arabic("اللَّهِ"), "الله");
    }

    #[test]
    fn folds_alef_variants() {
        assert_eq!(normalize_arabic("أحد"), "احد");
        assert_eq!(normalize_arabic("إلى"), "الي");
        assert_eq!(normalize_arabic("آمن"), "امن");
    }

    #[test]
    fn folds_ya_and_ta_marbuta() {
        assert_eq!(normalize_arabic("موسى"), "موسي");
        assert_eq!(normalize_arabic("رحمة"), "رحمه");
    }

    #[test]
    fn idempotent() {
        let samples = ["بِسْمِ اللَّهِ الرَّحِيمِ", "أإآ ىی ة", "  Bismillah  ", ""];
        for sample in samples {
            let once = normalize_arabic(sample);
            assert_eq!(normalize_arabic(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn diacritic_insensitive_equality() {
        assert_eq!(normalize_arabic("بِسْمِ"), normalize_arabic("بسم"));
    }

    #[test]
    fn mixed_script_trims_and_lowercases() {
        assert_eq!(normalize_arabic("  BISMILLAH "), "bismillah");
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert_eq!(normalize_arabic(""), "");
        assert_eq!(normalize_arabic("   "), "");
    }
}
