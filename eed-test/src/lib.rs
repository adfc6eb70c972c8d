//! Test support for the EED crates:
//! - a slow scorer that keeps the full DP table, used as an oracle;
//! - seeded generators for sentences and their corruptions.
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Plain cost parameters, independent of the `eed` crate types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Costs {
    pub del: f64,
    pub ins: f64,
    pub sub: f64,
    pub jump: f64,
    pub rho: f64,
}

impl Default for Costs {
    fn default() -> Self {
        Costs {
            del: 0.2,
            ins: 1.0,
            sub: 1.0,
            jump: 2.0,
            rho: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FullTable {
    /// One row per prefix of the padded reference, including the initial row.
    pub table: Vec<Vec<f64>>,
    /// Number of times each hypothesis position was the first row minimum.
    pub visits: Vec<usize>,
    pub errors: f64,
    pub score: f64,
}

/// Computes EED while keeping every row, with the visits-above-one coverage.
pub fn full_table_eed(hyp: &str, reference: &str, c: &Costs) -> FullTable {
    let hyp = format!(" {hyp} ").chars().collect_vec();
    let reference = format!(" {reference} ").chars().collect_vec();
    let n = hyp.len();

    let mut table = vec![(0..=n).map(|i| if i == 0 { 0.0 } else { 1.0 }).collect_vec()];
    let mut visits = vec![0; n + 1];

    for (w, &r) in reference.iter().enumerate() {
        let prev = &table[w];
        let mut cur = vec![f64::INFINITY; n + 1];
        for i in 0..=n {
            cur[i] = if i == 0 {
                prev[0] + 1.0
            } else {
                let d = if hyp[i - 1] == r { 0.0 } else { c.sub };
                [cur[i - 1] + c.del, prev[i - 1] + d, prev[i] + c.ins]
                    .into_iter()
                    .fold(f64::INFINITY, f64::min)
            };
        }
        let (min_idx, min_val) = cur
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::INFINITY), |best, (i, v)| {
                if v < best.1 {
                    (i, v)
                } else {
                    best
                }
            });
        visits[min_idx] += 1;
        if r.is_whitespace() {
            cur = cur.into_iter().map(|v| v.min(min_val + c.jump)).collect();
        }
        table.push(cur);
    }

    let errors = table.last().unwrap()[n];
    let coverage = c.rho * visits.iter().filter(|&&v| v > 1).sum::<usize>() as f64;
    let score = f64::min(
        1.0,
        (errors + coverage) / (reference.len() as f64 + coverage),
    );
    FullTable {
        table,
        visits,
        errors,
        score,
    }
}

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

const WORDS: &[&str] = &[
    "the", "a", "cat", "dog", "sat", "on", "mat", "hello", "world", "say", "relations", "between",
    "have", "been", "strained", "for", "years", "über", "naïve", "東京", "is", "big",
];

/// A sentence of `len` words from a small vocabulary, joined by single spaces.
pub fn random_sentence(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| *WORDS.choose(rng).unwrap())
        .join(" ")
}

/// A string of `len` characters drawn from `alphabet`.
pub fn random_string(rng: &mut impl Rng, alphabet: &[char], len: usize) -> String {
    (0..len).map(|_| *alphabet.choose(rng).unwrap()).collect()
}

/// The words of `s` in random order.
pub fn shuffle_words(rng: &mut impl Rng, s: &str) -> String {
    let mut words = s.split(' ').collect_vec();
    words.shuffle(rng);
    words.join(" ")
}

/// Replace the characters at `positions` by `c`.
pub fn substitute(s: &str, positions: &[usize], c: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, x)| if positions.contains(&i) { c } else { x })
        .collect()
}

/// Apply `k` random character substitutions, insertions or deletions.
pub fn mutate(rng: &mut impl Rng, s: &str, alphabet: &[char], k: usize) -> String {
    let mut chars = s.chars().collect_vec();
    for _ in 0..k {
        let c = *alphabet.choose(rng).unwrap();
        match rng.gen_range(0..3) {
            0 if !chars.is_empty() => {
                let i = rng.gen_range(0..chars.len());
                chars[i] = c;
            }
            1 if !chars.is_empty() => {
                chars.remove(rng.gen_range(0..chars.len()));
            }
            _ => {
                let i = rng.gen_range(0..=chars.len());
                chars.insert(i, c);
            }
        }
    }
    chars.into_iter().collect()
}
