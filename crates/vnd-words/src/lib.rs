//! Vietnamese Currency Words
//!
//! Reads a non-negative amount of đồng out as Vietnamese words,
//! e.g. `1_500_000` -> "Một triệu năm trăm nghìn đồng".
//!
//! The number is split into groups of three digits. Each group is read on its
//! own and followed by its magnitude word. Zero groups are skipped entirely.

/// Digit words, indexed by digit value
const DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// Magnitude words, indexed by three-digit group (0 = ones)
///
/// The last tier ("tỷ tỷ", 10^18) is the only one needed past "triệu tỷ"
/// to cover the whole `u64` range.
const UNITS: [&str; 7] = ["", "nghìn", "triệu", "tỷ", "nghìn tỷ", "triệu tỷ", "tỷ tỷ"];

/// Currency unit appended to every phrase
pub const CURRENCY: &str = "đồng";

/// Phrase used for a zero amount
pub const ZERO: &str = "Không đồng";

/// Convert an amount to its Vietnamese currency phrase
///
/// Never fails: every `u64` has a reading.
pub fn to_words(number: u64) -> String {
    if number == 0 {
        return ZERO.to_string();
    }

    let mut parts = Vec::new();
    let mut rest = number;
    let mut tier = 0;

    while rest > 0 {
        let group = (rest % 1000) as u16;
        if group != 0 {
            parts.push(format!("{} {}", read_group(group), UNITS[tier]));
        }
        rest /= 1000;
        tier += 1;
    }
    parts.reverse();

    let phrase = parts.join(" ").split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{} {}", capitalize_first(&phrase), CURRENCY)
}

/// Read one group of up to three digits, lowercase and without a unit
///
/// Values of 1000 and above are reduced modulo 1000. A zero group reads as "".
pub fn read_group(group: u16) -> String {
    let group = group % 1000;
    let hundreds = (group / 100) as usize;
    let tens = (group % 100 / 10) as usize;
    let ones = (group % 10) as usize;

    let mut words: Vec<&str> = Vec::with_capacity(5);

    if hundreds != 0 {
        words.push(DIGITS[hundreds]);
        words.push("trăm");
        if tens == 0 && ones != 0 {
            words.push("linh");
        }
    }

    match tens {
        0 => {
            if ones != 0 {
                words.push(DIGITS[ones]);
            }
        }
        1 => {
            words.push("mười");
            words.extend(ones_after_tens(ones, "một"));
        }
        _ => {
            words.push(DIGITS[tens]);
            words.push("mươi");
            words.extend(ones_after_tens(ones, "mốt"));
        }
    }

    words.join(" ")
}

/// Ones digit following a tens word: 5 becomes "lăm", 1 depends on the tens
fn ones_after_tens(ones: usize, one: &'static str) -> Option<&'static str> {
    match ones {
        0 => None,
        1 => Some(one),
        5 => Some("lăm"),
        n => Some(DIGITS[n]),
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_words(0), "Không đồng");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(to_words(1), "Một đồng");
        assert_eq!(to_words(15), "Mười lăm đồng");
        assert_eq!(to_words(100), "Một trăm đồng");
        assert_eq!(to_words(105), "Một trăm linh năm đồng");
        assert_eq!(to_words(121), "Một trăm hai mươi mốt đồng");
    }

    #[test]
    fn test_magnitudes() {
        assert_eq!(to_words(1000), "Một nghìn đồng");
        assert_eq!(to_words(1_500_000), "Một triệu năm trăm nghìn đồng");
        assert_eq!(to_words(2_000_000_000), "Hai tỷ đồng");
        assert_eq!(to_words(3_000_000_000_000), "Ba nghìn tỷ đồng");
        assert_eq!(to_words(4_000_000_000_000_000), "Bốn triệu tỷ đồng");
    }

    #[test]
    fn test_zero_groups_are_dropped() {
        assert_eq!(to_words(1_000_000), "Một triệu đồng");
        assert!(!to_words(1_000_000).contains("không nghìn"));
        assert_eq!(to_words(1_000_005), "Một triệu năm đồng");
        assert_eq!(to_words(7_000_000_021), "Bảy tỷ hai mươi mốt đồng");
    }

    #[test]
    fn test_read_group() {
        assert_eq!(read_group(0), "");
        assert_eq!(read_group(10), "mười");
        assert_eq!(read_group(11), "mười một");
        assert_eq!(read_group(14), "mười bốn");
        assert_eq!(read_group(21), "hai mươi mốt");
        assert_eq!(read_group(25), "hai mươi lăm");
        assert_eq!(read_group(40), "bốn mươi");
        assert_eq!(read_group(101), "một trăm linh một");
        assert_eq!(read_group(110), "một trăm mười");
        assert_eq!(read_group(999), "chín trăm chín mươi chín");
        // Reduced modulo 1000
        assert_eq!(read_group(1015), "mười lăm");
    }

    #[test]
    fn test_u64_max_uses_extended_tier() {
        assert_eq!(
            to_words(u64::MAX),
            "Mười tám tỷ tỷ bốn trăm bốn mươi sáu triệu tỷ bảy trăm bốn mươi bốn nghìn tỷ \
             bảy mươi ba tỷ bảy trăm linh chín triệu năm trăm năm mươi mốt nghìn \
             sáu trăm mười lăm đồng"
        );
    }

    #[test]
    fn test_phrase_shape() {
        let samples = (0..=20_000u64)
            .chain((0..2_000u64).map(|n| n * 1_000_003))
            .chain([999_999_999, 1_000_000_001, 10u64.pow(18), u64::MAX]);

        for n in samples {
            let words = to_words(n);
            assert!(!words.contains("  "), "double space in {n}: {words:?}");
            assert_eq!(words, words.trim(), "untrimmed phrase for {n}");
            assert!(words.ends_with(" đồng"), "missing currency for {n}");
            let first = words.chars().next().unwrap();
            assert!(first.is_uppercase(), "not capitalized for {n}: {words:?}");
        }
    }
}
