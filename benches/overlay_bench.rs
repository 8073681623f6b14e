// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lightbox::{parse_html, LoadOptions, Overlay, Window};

fn load_unload_benchmark(c: &mut Criterion) {
    let window = Window::default();
    let mut overlay = Overlay::new(&window).unwrap();
    let options = LoadOptions::new().z_index(500).background("red");

    c.bench_function("overlay_load_unload", |b| {
        b.iter(|| {
            overlay
                .load_with(black_box("https://accounts.example.com/signin"), &options)
                .unwrap();
            overlay.unload().unwrap();
        })
    });
}

fn host_page_benchmark(c: &mut Criterion) {
    let html = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Relier</title></head>
        <body>
            <div id="content">
                <button id="signin">Sign in</button>
                <button id="signup">Sign up</button>
            </div>
        </body>
        </html>
    "#;

    c.bench_function("render_into_page", |b| {
        b.iter(|| {
            let window = Window::new(parse_html(black_box(html)).unwrap());
            let mut overlay = Overlay::new(&window).unwrap();
            overlay.load("about:blank").unwrap();
            black_box(window.dom().unwrap().outer_html().len())
        })
    });
}

criterion_group!(benches, load_unload_benchmark, host_page_benchmark);
criterion_main!(benches);
