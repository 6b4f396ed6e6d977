use lazy_static::lazy_static;
use std::collections::HashSet;

/// Trailing punctuation recognized (and stripped) by [`normalize`].
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

lazy_static! {
    static ref DEFAULT_NOISE_WORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Built-in English noise words, for callers that do not load their own list.
pub fn default_noise_words() -> HashSet<String> {
    DEFAULT_NOISE_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Normalize a raw whitespace-split token into a keyword, or reject it.
///
/// The token is lower-cased, then trailing punctuation from
/// [`TRAILING_PUNCTUATION`] is stripped one character at a time until the
/// trailing character is a letter or a digit. A trailing character outside
/// all three classes rejects the token outright. What remains must be
/// non-empty, not a noise word, and purely alphabetic.
///
/// Digits stop the stripping loop but still disqualify the token in the
/// final alphabetic check, so `"ab3!"` strips to `"ab3"` and is then
/// rejected rather than being stripped down to `"ab"`.
pub fn normalize(raw: &str, noise_words: &HashSet<String>) -> Option<String> {
    let mut word = raw.to_lowercase();
    loop {
        match word.chars().last() {
            None => return None,
            Some(c) if c.is_alphabetic() || c.is_numeric() => break,
            Some(c) if TRAILING_PUNCTUATION.contains(&c) => {
                word.pop();
            }
            Some(_) => return None,
        }
    }
    if noise_words.contains(&word) {
        return None;
    }
    if word.chars().any(|c| !c.is_alphabetic()) {
        return None;
    }
    Some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn lowercases_and_strips_trailing_punctuation() {
        let nw = noise(&[]);
        assert_eq!(normalize("Word!!", &nw), Some("word".to_string()));
        assert_eq!(normalize("mat.", &nw), Some("mat".to_string()));
        assert_eq!(normalize("So,?:;!", &nw), Some("so".to_string()));
    }

    #[test]
    fn rejects_unrecognized_trailing_character() {
        let nw = noise(&[]);
        assert_eq!(normalize("wor#d", &nw), None);
        assert_eq!(normalize("word)", &nw), None);
        assert_eq!(normalize("word!)", &nw), None);
    }

    #[test]
    fn rejects_when_nothing_remains() {
        let nw = noise(&[]);
        assert_eq!(normalize("!!!", &nw), None);
        assert_eq!(normalize("", &nw), None);
    }

    #[test]
    fn filters_noise_words_case_insensitively() {
        let nw = noise(&["the", "is"]);
        assert_eq!(normalize("The", &nw), None);
        assert_eq!(normalize("IS!", &nw), None);
        assert_eq!(normalize("these", &nw), Some("these".to_string()));
    }

    #[test]
    fn digits_stop_stripping_but_disqualify_the_token() {
        let nw = noise(&[]);
        // The trailing digit halts the strip loop, then fails the
        // alphabetic check. "ab3!!" must not survive as "ab".
        assert_eq!(normalize("ab3!!", &nw), None);
        assert_eq!(normalize("ab3", &nw), None);
        assert_eq!(normalize("a1b", &nw), None);
        assert_eq!(normalize("2042.", &nw), None);
    }

    #[test]
    fn rejects_interior_punctuation() {
        let nw = noise(&[]);
        assert_eq!(normalize("o'clock", &nw), None);
        assert_eq!(normalize("semi-colon", &nw), None);
    }

    #[test]
    fn idempotent_on_produced_keywords() {
        let nw = noise(&["the"]);
        for raw in ["Keyword!!", "Plain", "mixed,;."] {
            let kw = normalize(raw, &nw).unwrap();
            assert_eq!(normalize(&kw, &nw), Some(kw));
        }
    }

    #[test]
    fn default_noise_words_cover_common_stopwords() {
        let nw = default_noise_words();
        assert!(nw.contains("the"));
        assert!(nw.contains("and"));
        assert_eq!(normalize("The", &nw), None);
    }
}
