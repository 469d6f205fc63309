// Criterion benchmarks for wordbook.
//
// All benchmarks run against a fixed in-memory word list, so no external
// dictionary file is needed.
//
// Run:
//   cargo bench -p wordbook

use criterion::{Criterion, criterion_group, criterion_main};

use wordbook::{WordbookHandle, autocorrect, levenshtein, suggestions};

/// Fixed 60-word dictionary used by every benchmark.
fn wordlist() -> Vec<String> {
    [
        "apple", "apply", "ample", "amble", "angle", "ankle", "banana", "band",
        "bend", "bind", "bond", "brand", "bread", "break", "bring", "broad",
        "cat", "cot", "dot", "coat", "cost", "cast", "chart", "chase", "cheap",
        "check", "chess", "chest", "child", "claim", "hello", "help", "hero",
        "herd", "here", "hedge", "house", "horse", "hound", "human", "word",
        "world", "work", "worse", "worth", "would", "wound", "wrist", "write",
        "wrong", "table", "tablet", "tackle", "talent", "target", "temple",
        "tender", "theory", "thread", "throne",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

/// Pairwise distance over a set of near-miss pairs.
fn bench_levenshtein(c: &mut Criterion) {
    let pairs = [
        ("kitten", "sitting"),
        ("wrod", "word"),
        ("appl", "apple"),
        ("chracter", "character"),
        ("pronounciation", "pronunciation"),
    ];

    c.bench_function("levenshtein_5_pairs", |b| {
        b.iter(|| {
            for (a, w) in &pairs {
                std::hint::black_box(levenshtein(a, w));
            }
        });
    });
}

/// Suggestion scan for a small set of misspelled words.
fn bench_suggestions(c: &mut Criterion) {
    let dictionary = wordlist();
    let misspelled = ["wrod", "helo", "aple", "brend", "chek"];

    c.bench_function("suggest_5_misspelled", |b| {
        b.iter(|| {
            for word in &misspelled {
                std::hint::black_box(suggestions(word, &dictionary));
            }
        });
    });
}

/// Autocorrect chase at the default depth.
fn bench_autocorrect(c: &mut Criterion) {
    let dictionary = wordlist();
    let misspelled = ["wrod", "helo", "aple"];

    c.bench_function("autocorrect_3_misspelled", |b| {
        b.iter(|| {
            for word in &misspelled {
                std::hint::black_box(autocorrect(word, 2, &dictionary));
            }
        });
    });
}

/// Full lookup flow over the whole word list plus some misses.
fn bench_lookup(c: &mut Criterion) {
    let handle = WordbookHandle::from_words(wordlist());
    let queries: Vec<String> = wordlist()
        .into_iter()
        .chain(["wrod", "helo", "xyz123"].iter().map(|w| w.to_string()))
        .collect();

    c.bench_function("lookup_63_queries", |b| {
        b.iter(|| {
            for word in &queries {
                std::hint::black_box(handle.lookup(word));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_levenshtein,
    bench_suggestions,
    bench_autocorrect,
    bench_lookup,
);
criterion_main!(benches);
