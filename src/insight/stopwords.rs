//! English stopword list

/// Common English function words, sorted for binary search
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "another", "any", "are", "as", "at", "b", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "c", "came", "can", "cannot", "come", "could",
    "d", "did", "do", "does", "doing", "down", "during", "e", "each", "f", "few", "for",
    "from", "further", "g", "get", "got", "h", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "j", "just", "k", "l", "like", "m", "make",
    "many", "me", "might", "more", "most", "much", "must", "my", "myself", "n", "never",
    "no", "nor", "not", "now", "o", "of", "off", "on", "once", "only", "or", "other",
    "others", "our", "ours", "ourselves", "out", "over", "own", "p", "q", "r", "s", "said",
    "same", "see", "she", "should", "since", "so", "some", "still", "such", "t", "take",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "thus", "to", "too", "u", "under",
    "until", "up", "upon", "v", "very", "w", "was", "way", "we", "well", "were", "what",
    "when", "where", "which", "while", "who", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "x", "y", "you", "your", "yours", "yourself",
    "yourselves", "z",
];

/// Whether `word` (already lowercase) is a stopword
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.binary_search(&word).is_ok()
}
