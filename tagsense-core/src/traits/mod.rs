mod word_similarity;

pub use word_similarity::IWordSimilarity;
