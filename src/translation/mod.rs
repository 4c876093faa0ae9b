/*!
 * Translation of transcript text.
 *
 * - `chunking`: Splitting text into size-limited chunks
 * - `chunked`: Chunk-by-chunk translation with bounded per-chunk retry
 */

// Re-export main types for easier usage
pub use self::chunked::ChunkedTranslator;
pub use self::chunking::split_into_chunks;

// Submodules
pub mod chunked;
pub mod chunking;
