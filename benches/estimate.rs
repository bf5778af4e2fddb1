/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use objsize::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::hint::black_box;
use std::rc::Rc;

const LENS: [usize; 4] = [1 << 8, 1 << 12, 1 << 16, 1 << 20];

struct Person {
    age: u32,
    name: String,
    friend: Option<Rc<Person>>,
}

inspect_object!(Person { age, name, friend });

fn bench_estimate(c: &mut Criterion) {
    let _ = objsize::init_env_logger();
    let mut rng = SmallRng::seed_from_u64(0);
    let estimator = SizeEstimator::default();

    let mut group = c.benchmark_group("fixed_array");
    for len in LENS {
        let values = (0..len).map(|_| rng.random::<u64>()).collect::<Vec<_>>();
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| black_box(estimator.estimate(values)))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("closed_map");
    for len in LENS {
        let map = (0..len as u32)
            .map(|key| (key, format!("value {}", rng.random::<u16>())))
            .collect::<HashMap<_, _>>();
        group.bench_with_input(BenchmarkId::from_parameter(len), &map, |b, map| {
            b.iter(|| black_box(estimator.estimate(map)))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("object_graph");
    for len in LENS {
        let mut people: Vec<Rc<Person>> = Vec::with_capacity(len);
        for i in 0..len {
            let friend = (i > 0).then(|| people[rng.random_range(0..i)].clone());
            people.push(Rc::new(Person {
                age: rng.random_range(0..100),
                name: format!("person {}", i),
                friend,
            }));
        }
        group.bench_with_input(BenchmarkId::from_parameter(len), &people, |b, people| {
            b.iter(|| black_box(estimator.estimate(people)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
