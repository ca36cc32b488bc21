#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Reducer and query encoding benchmarks: advsearch vs url crate
use advsearch::{Action, Parameter, ParameterList, initial_state, reduce};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// Rust url crate
use url::form_urlencoded::Serializer as FormSerializer;

fn sample_list(size: usize) -> ParameterList {
    (0..size)
        .map(|i| {
            if i % 2 == 0 {
                Parameter::new("tags[]", format!("tag {i}"))
            } else {
                Parameter::new(format!("field{i}"), format!("value {i}"))
            }
        })
        .collect()
}

fn bench_add_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_add");

    for size in [8, 64, 512] {
        let actions: Vec<Action> = sample_list(size).into_iter().map(Action::Add).collect();
        group.bench_function(format!("advsearch_{size}"), |b| {
            b.iter(|| {
                actions
                    .iter()
                    .cloned()
                    .fold(initial_state(), |state, action| reduce(state, black_box(action)))
            });
        });
    }

    group.finish();
}

fn bench_remove_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_remove");
    let list = sample_list(256);
    let last = list.as_slice().last().cloned().unwrap();

    group.bench_function("advsearch_last_of_256", |b| {
        b.iter(|| {
            let state = advsearch::State::new(list.clone());
            reduce(state, Action::Remove(black_box(last.clone())))
        });
    });

    group.finish();
}

fn bench_encode_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_query");
    let list = sample_list(64);

    group.bench_function("advsearch", |b| {
        b.iter(|| black_box(&list).to_query_string());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut serializer = FormSerializer::new(String::new());
            for param in black_box(&list) {
                serializer.append_pair(param.name(), param.value());
            }
            serializer.finish()
        });
    });

    group.finish();
}

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_query");
    let query = sample_list(64).search();

    group.bench_function("advsearch", |b| {
        b.iter(|| ParameterList::parse(black_box(&query)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::parse(black_box(query[1..].as_bytes()))
                .into_owned()
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add_all,
    bench_remove_all,
    bench_encode_all,
    bench_parse_all
);

criterion_main!(benches);
