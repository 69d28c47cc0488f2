// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_SENTENCE_CACHE_SIZE: u64 = 10_000;

// --- Taxonomy ---
pub const DEFAULT_LEVEL_BOUNDARIES: [usize; 5] = [1, 2, 4, 5, 7];
pub const DEFAULT_MIN_CODE_LEN: usize = 6;

// --- Sememe ---
pub const DEFAULT_ALFA: f64 = 1.6;
pub const DEFAULT_BETA: [f64; 4] = [0.5, 0.2, 0.17, 0.13];
pub const DEFAULT_GAMA: f64 = 0.2;
pub const DEFAULT_DELTA: f64 = 0.2;
pub const DEFAULT_UNREACHABLE_DISTANCE: f64 = 20.0;

// --- Matcher ---
pub const DEFAULT_USE_EMBEDDING: bool = true;
pub const DEFAULT_USE_TAXONOMY: bool = false;
pub const DEFAULT_USE_SEMEME: bool = false;
pub const DEFAULT_USE_DESCRIPTIONS: bool = true;
pub const DEFAULT_RETURN_COUNT: usize = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
