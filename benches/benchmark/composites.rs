use crate::common::{configure_criterion, raw_user, user_schema, users_validator, valid_users};
use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use value_rail::prelude::*;

pub fn bench_object(c: &mut Criterion) {
    let mut group = c.benchmark_group("composites/object");

    let fail_fast = user_schema(ObjectOptions::new());
    let collect_all = user_schema(ObjectOptions::new().unbounded_errors());
    let valid = raw_user(1);
    let invalid = raw_user(77);

    group.bench_function("valid", |b| b.iter(|| black_box(fail_fast.construct(black_box(&valid)))));
    group.bench_function("invalid_fail_fast", |b| {
        b.iter(|| black_box(fail_fast.construct(black_box(&invalid))))
    });
    group.bench_function("invalid_collect_all", |b| {
        b.iter(|| black_box(collect_all.construct(black_box(&invalid))))
    });

    group.finish();
}

pub fn bench_array_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("composites/array_scaling");
    let validator = users_validator(Some(1));

    for len in [10usize, 100, 1000] {
        let raw = valid_users(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &raw, |b, raw| {
            b.iter(|| black_box(validator.construct(black_box(raw))))
        });
    }

    group.finish();
}

pub fn bench_optional_and_any_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("composites/union");

    let nickname = OptionalValidator::with_none_values(
        StringValidator::new(StringOptions::new().max_length(32)).unwrap(),
        [Raw::Null, Raw::Undefined],
    )
    .unwrap();
    let id = AnyOfValidator::new([
        IntegerValidator::new(IntegerOptions::new().min(1)).unwrap().shared(),
        StringValidator::new(StringOptions::new().min_length(6)).unwrap().shared(),
    ])
    .unwrap();

    let absent = Raw::Null;
    let present = Raw::from("ada");
    let second_candidate = Raw::from("abcdef");
    let no_candidate = Raw::from(true);

    group.bench_function("optional_absent", |b| b.iter(|| black_box(nickname.construct(black_box(&absent)))));
    group.bench_function("optional_present", |b| {
        b.iter(|| black_box(nickname.construct(black_box(&present))))
    });
    group.bench_function("any_of_second", |b| {
        b.iter(|| black_box(id.construct(black_box(&second_candidate))))
    });
    group.bench_function("any_of_none", |b| b.iter(|| black_box(id.construct(black_box(&no_candidate)))));

    group.finish();
}

criterion_group! {
    name = composite_benches;
    config = configure_criterion();
    targets = bench_object, bench_array_scaling, bench_optional_and_any_of,
}
