use super::tokens::{LZ77Token, MIN_MATCH};

/// Hash table size for the 3-byte prefix index (power of 2)
const HASH_BITS: u32 = 15;
const HASH_SIZE: usize = 1 << HASH_BITS;
const HASH_MASK: usize = HASH_SIZE - 1;

/// Empty chain slot
const NIL: usize = usize::MAX;

/// Compute a hash for the 3 bytes starting at `pos`
///
/// Caller guarantees `pos + 2 < data.len()`.
#[inline]
fn hash3(data: &[u8], pos: usize) -> usize {
    let h = (data[pos] as usize) << 10 ^ (data[pos + 1] as usize) << 5 ^ (data[pos + 2] as usize);
    h & HASH_MASK
}

/// Hash-chain index over every position already behind the cursor
///
/// `prev` is a ring sized to the window: an entry for position `p` is only
/// dereferenced while `p` is still inside the window, so it cannot have been
/// overwritten by a newer position.
struct HashChain {
    /// head[hash] = most recent position with this hash
    head: Vec<usize>,
    /// prev[pos % ring] = previous position with the same hash
    prev: Vec<usize>,
    ring: usize,
}

impl HashChain {
    fn new(ring: usize) -> Self {
        Self { head: vec![NIL; HASH_SIZE], prev: vec![NIL; ring], ring }
    }

    fn insert(&mut self, data: &[u8], pos: usize) {
        if pos + 2 >= data.len() {
            return;
        }
        let h = hash3(data, pos);
        self.prev[pos % self.ring] = self.head[h];
        self.head[h] = pos;
    }
}

/// Greedy longest-match finder
///
/// Produces exactly what a brute-force scan of the window would: every start
/// position in `i - window_size .. i` is a candidate, the longest match (capped
/// at `max_length`) wins, and among equal lengths the earliest start, that is
/// the largest distance, is kept.
pub struct MatchFinder {
    window_size: usize,
    max_length: usize,
}

impl MatchFinder {
    pub fn new(window_size: usize, max_length: usize) -> Self {
        Self { window_size, max_length }
    }

    /// Tokenize `data` into literals and back-references
    pub fn tokenize(&self, data: &[u8]) -> Vec<LZ77Token> {
        let mut tokens = Vec::with_capacity(data.len() / 2 + 1);
        if data.is_empty() {
            return tokens;
        }

        let mut chain = HashChain::new(self.window_size.min(data.len()).max(1));
        let mut candidates = Vec::with_capacity(self.window_size.min(4096));

        let mut i = 0;
        while i < data.len() {
            let (length, distance) = self.longest_match(data, i, &chain, &mut candidates);

            let advance = if length >= MIN_MATCH {
                tokens.push(LZ77Token::Copy { length: length as u16, distance: distance as u32 });
                length
            } else {
                tokens.push(LZ77Token::Literal(data[i]));
                1
            };

            for pos in i..i + advance {
                chain.insert(data, pos);
            }
            i += advance;
        }

        tokens
    }

    /// Find the best match for position `i`, returning `(length, distance)`
    fn longest_match(
        &self,
        data: &[u8],
        i: usize,
        chain: &HashChain,
        candidates: &mut Vec<usize>,
    ) -> (usize, usize) {
        let limit = self.max_length.min(data.len() - i);
        if limit < MIN_MATCH || self.window_size == 0 {
            return (0, 0);
        }

        // Any match of MIN_MATCH or more shares the 3-byte prefix, so the
        // chain holds every candidate that matters. Gather newest-first,
        // then scan oldest-first so the first strictly-longer match wins.
        let start = i.saturating_sub(self.window_size);
        candidates.clear();
        let mut cand = chain.head[hash3(data, i)];
        while cand != NIL && cand >= start {
            candidates.push(cand);
            cand = chain.prev[cand % chain.ring];
        }

        let mut best_len = 0;
        let mut best_dist = 0;
        for &j in candidates.iter().rev() {
            let len = match_length(data, j, i, limit);
            if len > best_len {
                best_len = len;
                best_dist = i - j;
                if best_len == limit {
                    break;
                }
            }
        }

        (best_len, best_dist)
    }
}

/// Length of the common run starting at `j` and `i` (`j < i`), up to `limit`
///
/// The run may extend past `i`; the bytes are all in `data`.
#[inline]
fn match_length(data: &[u8], j: usize, i: usize, limit: usize) -> usize {
    data[j..].iter().zip(&data[i..i + limit]).take_while(|(a, b)| a == b).count()
}
