use blocklet::{BlockFont, RenderOptions, WrapMode, render_text};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn benchmark_render_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_text");

    let texts = [
        ("SHORT", "HI"),
        ("MEDIUM", "HELLO WORLD"),
        ("LONG", "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG"),
    ];
    let fonts = [("standard", BlockFont::Standard), ("mini", BlockFont::Mini)];
    let options = RenderOptions::default();

    for (font_name, font) in fonts {
        for (size_label, text) in texts {
            group.bench_with_input(
                BenchmarkId::new(format!("{font_name}_{size_label}"), text.len()),
                text,
                |b, text| {
                    b.iter(|| render_text(black_box(text), font, &options));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_word_wrapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_wrapping");

    let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

    for max_width in [20usize, 40, 80] {
        let options = RenderOptions {
            max_width: Some(max_width),
            wrap: WrapMode::Words,
            ..RenderOptions::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(max_width),
            &options,
            |b, options| {
                b.iter(|| render_text(black_box(text), BlockFont::Standard, options));
            },
        );
    }

    group.finish();
}

fn benchmark_shadow(c: &mut Criterion) {
    let mut group = c.benchmark_group("shadow");

    let text = "HELLO WORLD";

    for shadow in [false, true] {
        let options = RenderOptions {
            shadow,
            ..RenderOptions::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(shadow),
            &options,
            |b, options| {
                b.iter(|| render_text(black_box(text), BlockFont::Standard, options));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_text,
    benchmark_word_wrapping,
    benchmark_shadow
);
criterion_main!(benches);
