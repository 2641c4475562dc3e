use crate::word::Word;

/// Number of words every game is built with.
pub const TOTAL_WORDS: usize = 12;

pub const DICTIONARY: [&str; TOTAL_WORDS] = [
    "algoritmo",
    "contenedora",
    "avance",
    "ciclo",
    "indice",
    "instrucciones",
    "arreglo",
    "vector",
    "inicio",
    "cuerpo",
    "recorrido",
    "patron",
];

/// Shown by the front-ends next to the masked word.
pub const HINT: &str = "Programming terms";

/// Build the dictionary words, skipping any empty entry.
#[must_use]
pub fn load_dictionary() -> Vec<Word> {
    load_wordbank_from_slice(&DICTIONARY)
}

pub fn load_wordbank_from_slice(words: &[&str]) -> Vec<Word> {
    words
        .iter()
        .map(|w| w.trim())
        .filter_map(|w| Word::new(w).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_has_every_word() {
        let words = load_dictionary();
        assert_eq!(words.len(), TOTAL_WORDS);
        assert_eq!(words[0].to_string(), "algoritmo");
        assert_eq!(words[TOTAL_WORDS - 1].to_string(), "patron");
    }

    #[test]
    fn test_blank_entries_skipped() {
        let words = load_wordbank_from_slice(&["ciclo", "", "  ", " vector "]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].to_string(), "vector");
    }
}
