//! Pure English text helpers for chapter headings.
//!
//! Auto-numbered chapters are labeled with spelled-out cardinals
//! ("Chapter Twenty-One" rather than "Chapter 21"), so headings need a
//! number-to-words conversion and English title casing.

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Convert a number to its English cardinal words.
///
/// Tens are hyphenated; hundreds and thousands are spelled out without
/// "and". Numbers past 999,999 fall back to digits.
///
/// # Examples
///
/// ```
/// use binder::words::number_to_words;
///
/// assert_eq!(number_to_words(1), "one");
/// assert_eq!(number_to_words(21), "twenty-one");
/// assert_eq!(number_to_words(140), "one hundred forty");
/// ```
pub fn number_to_words(n: usize) -> String {
    match n {
        0..=19 => ONES[n].to_string(),
        20..=99 => {
            if n % 10 == 0 {
                TENS[n / 10].to_string()
            } else {
                format!("{}-{}", TENS[n / 10], ONES[n % 10])
            }
        }
        100..=999 => {
            if n % 100 == 0 {
                format!("{} hundred", ONES[n / 100])
            } else {
                format!("{} hundred {}", ONES[n / 100], number_to_words(n % 100))
            }
        }
        1_000..=999_999 => {
            if n % 1_000 == 0 {
                format!("{} thousand", number_to_words(n / 1_000))
            } else {
                format!(
                    "{} thousand {}",
                    number_to_words(n / 1_000),
                    number_to_words(n % 1_000)
                )
            }
        }
        _ => n.to_string(),
    }
}

/// Title-case text using English word-initial capitalization.
///
/// The first alphanumeric character of each word is uppercased and the
/// rest lowercased. Any non-alphanumeric character except an apostrophe
/// starts a new word, so hyphenated compounds capitalize both parts while
/// contractions stay intact.
///
/// # Examples
///
/// ```
/// use binder::words::title_case;
///
/// assert_eq!(title_case("the great escape"), "The Great Escape");
/// assert_eq!(title_case("twenty-one"), "Twenty-One");
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            if c != '\'' && c != '\u{2019}' {
                at_word_start = true;
            }
        }
    }
    out
}
