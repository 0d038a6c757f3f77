use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pm_core::{PixelBuffer, Rgba8};
use pm_trim::trim_black_margins;

fn bench_trim_framed(c: &mut Criterion) {
    let width = 1280usize;
    let height = 1024usize;
    let mut buf = PixelBuffer::new_fill(width, height, Rgba8::BLACK);
    for y in 96..(height - 96) {
        for x in 128..(width - 128) {
            let v = ((x + y) % 251) as u8;
            buf.pixels_mut()[y * width + x] = Rgba8::new(v, v, 255 - v, 255);
        }
    }
    let view = buf.as_view();

    c.bench_function("trim_black_margins_framed_1280x1024", |b| {
        b.iter(|| {
            let r = trim_black_margins(black_box(&view));
            black_box(r);
        });
    });
}

fn bench_trim_all_black(c: &mut Criterion) {
    let width = 1280usize;
    let height = 1024usize;
    let buf = PixelBuffer::new_fill(width, height, Rgba8::BLACK);
    let view = buf.as_view();

    c.bench_function("trim_black_margins_all_black_1280x1024", |b| {
        b.iter(|| {
            let r = trim_black_margins(black_box(&view));
            black_box(r);
        });
    });
}

criterion_group!(benches, bench_trim_framed, bench_trim_all_black);
criterion_main!(benches);
