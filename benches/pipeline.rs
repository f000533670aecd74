// benches/pipeline.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dmm_dashboard::{
    present::{HtmlFlavor, HtmlPresenter, Presenter},
    record::{Flag, Record},
    view::{FilterPatch, SortKey, ViewModel},
};

const NATIONS: [&str; 8] = ["AT", "CH", "DE", "ES", "FR", "IT", "PL", "UK"];
const PROJECTS: [&str; 4] = ["Biblissima", "e-codices", "Europeana", "Manuscriptorium"];

// Deterministic synthetic dataset, roughly the shape of the published one.
fn synthetic(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let mut r = Record::new(&format!("Library {:04}", (i * 7919) % n), NATIONS[i % NATIONS.len()]);
            r.city = Some(format!("City {}", i % 97));
            r.website = (i % 5 != 0).then(|| format!("https://lib{i}.example.org"));
            r.iiif = (i % 3 == 0).into();
            r.free_license = (i % 4 == 0).into();
            if i % 6 == 0 {
                r.is_part_of = Flag::True;
                r.is_part_of_project_name = Some(PROJECTS[i % PROJECTS.len()].to_string());
            }
            r
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let data = synthetic(2_000);

    c.bench_function("initialize", |b| {
        b.iter(|| {
            let mut vm = ViewModel::new();
            black_box(vm.initialize(black_box(data.clone())).len())
        })
    });

    let mut vm = ViewModel::new();
    vm.initialize(data.clone());

    c.bench_function("filter_search", |b| {
        b.iter(|| {
            vm.clear_filters();
            black_box(vm.set_filter(FilterPatch::default().search(black_box("city 4"))).len())
        })
    });

    c.bench_function("sort_toggle", |b| {
        b.iter(|| black_box(vm.set_sort(black_box(SortKey::Nation)).len()))
    });

    c.bench_function("render_html", |b| {
        let mut p = HtmlPresenter::new(HtmlFlavor::Docs);
        b.iter(|| {
            p.present(&vm.view());
            black_box(p.html().len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
