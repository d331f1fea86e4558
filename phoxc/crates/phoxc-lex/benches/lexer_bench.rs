//! Lexer Benchmarks
//!
//! Measures end-to-end throughput of the scanner thread and channel.
//! Run with: `cargo bench --package phoxc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use phoxc_lex::{Lexer, LexerOptions};

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source.as_bytes()).count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "<?php $x = 42; function main() { $y = $x + 1; return $y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_assignment", |b| {
        b.iter(|| lexer_token_count(black_box("<?php $x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    let source = r#"<?php
        $greeting = "Hello, $name! You have $count new messages.\n";
        $path = 'C:\\Users\\' . $user . '\\Documents';
        $html = <<<HTML
            <div class="card">
                <h1>$title</h1>
                <p>$body</p>
            </div>
            HTML;
        $cmd = `ls -la $dir`;
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_strings", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_channel_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_channel");

    let source = "<?php ".to_string() + &"$total += $price * $qty; // line\n".repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    for capacity in [1, 2, 64] {
        group.bench_function(format!("capacity_{capacity}"), |b| {
            b.iter(|| {
                let options = LexerOptions {
                    channel_capacity: capacity,
                    ..LexerOptions::default()
                };
                Lexer::with_options(black_box(source.as_bytes()), options).count()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_strings,
    bench_channel_capacity
);
criterion_main!(benches);
