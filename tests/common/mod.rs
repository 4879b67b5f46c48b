#![allow(dead_code)]

use std::env;

use rand::{Rng, SeedableRng};

/// 11 bytes, 11 chars.
pub const ASCII: &str = "hello world";

/// 13 bytes, 5 chars, mixing 2 and 3 byte codepoints.
pub const MIXED: &str = "çğ日本語";

// The following test vectors were taken from Ropey.

/// 127 bytes, 103 chars, 1 line
pub const TEXT: &str = "Hello there!  How're you doing?  It's a fine day, \
                        isn't it?  Aren't you glad we're alive?  \
                        こんにちは、みんなさん！";

/// 127 bytes, 107 chars, 1 line
pub const TEXT_EMOJI: &str = "Hello there!🐸  How're you doing?🐸  It's a \
                              fine day, isn't it?🐸  Aren't you glad we're \
                              alive?🐸  こんにちは、みんなさん！";

/// Text covering every UTF-8 encoding width, with mixed line breaks.
pub const NON_ASCII: &str = "Ḽơᶉëᶆ ȋṕšᶙṁ ḍỡḽǭᵳ ʂǐť ӓṁệẗ,\r\n çṓɲṩḙċťᶒțûɾ \
                             ấɖḯƥĭṩčįɳġ ḝłįʈ, 🦀🦀 șếᶑ ᶁⱺ ẽḭŭŝḿꝋď\n \
                             ṫĕᶆᶈṓɍ ỉñḉīḑȋᵭṵńť ṷŧ ḹẩḇőꝛế éȶ đꝍꞎ\r\n \
                             ôꝛȇ ᵯáꞡᶇā ąⱡîɋṹẵ. 𝔘𝔫𝔦𝔠𝔬𝔡𝔢 𐍈";

pub const FIXTURES: [&str; 5] = [ASCII, MIXED, TEXT, TEXT_EMOJI, NON_ASCII];

#[track_caller]
pub fn rng() -> impl rand::Rng {
    let seed = seed();
    println!("SEED: {seed:?}");
    rand_chacha::ChaChaRng::seed_from_u64(seed)
}

#[track_caller]
fn seed() -> u64 {
    match env::var("SEED") {
        Ok(seed) => seed.parse().expect("couldn't parse $SEED"),
        Err(env::VarError::NotPresent) => rand::random(),
        Err(env::VarError::NotUnicode(seed)) => {
            panic!("$SEED contained invalid unicode: {seed:?}")
        },
    }
}

/// Installs a `tracing` subscriber honoring `$RUST_LOG`, writing through the
/// test harness so the output is only shown for failing tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Returns the byte offset of the `char_offset`-th char of `s`, or its
/// length if `char_offset` is at the end.
pub fn byte_of_char(s: &str, char_offset: usize) -> usize {
    s.char_indices().nth(char_offset).map_or(s.len(), |(byte, _)| byte)
}

/// Returns the text in the char range `start..end` of `s`.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    &s[byte_of_char(s, start)..byte_of_char(s, end)]
}

/// Returns a random non-empty run of chars taken from one of the fixtures.
pub fn random_text(rng: &mut impl Rng, max_chars: usize) -> String {
    let source = FIXTURES[rng.random_range(0..FIXTURES.len())];
    let source_len = source.chars().count();
    let len = rng.random_range(1..=max_chars.min(source_len));
    let start = rng.random_range(0..=source_len - len);
    char_slice(source, start, start + len).to_owned()
}
