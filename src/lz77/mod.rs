pub mod matcher;
pub mod tokens;
pub mod window;

pub use matcher::MatchFinder;
pub use tokens::LZ77Token;
pub use window::decompress;

/// Tokenize `data` with a greedy longest-match search over `window_size` bytes
pub fn compress(data: &[u8], window_size: usize, max_length: usize) -> Vec<LZ77Token> {
    MatchFinder::new(window_size, max_length).tokenize(data)
}
