//! # tagsense-tokens
//!
//! Text plumbing shared by the similarity models:
//! jieba segmentation, stop words, label-term splitting, and
//! extraction of word/sentence evidence from document text.

pub mod evidence;
pub mod label;
pub mod resource;
pub mod stopwords;
pub mod text;
pub mod tokenizer;

pub use evidence::EvidenceExtractor;
pub use label::label_terms;
pub use resource::read_resource;
pub use stopwords::StopWords;
pub use tokenizer::Tokenizer;
