use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use domain::{Money, Order, Product, Searchable, Store, seed};
use std::hint::black_box;

fn catalog_of(size: usize) -> Store {
    let mut store = Store::new();
    let categories = ["Electronics", "Books", "Kitchen", "Garden"];
    for i in 0..size {
        let product = Product::new(
            format!("Product {i}"),
            Money::from_cents((i as i64 * 37) % 200_000),
            "Benchmark product",
            categories[i % categories.len()],
            (i % 51) as f64 / 10.0,
        )
        .unwrap();
        store.add_product(product);
    }
    store
}

fn bench_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain/search");

    for size in [100usize, 10_000] {
        let store = catalog_of(size);

        group.bench_with_input(BenchmarkId::new("category", size), &store, |b, store| {
            b.iter(|| store.search_by_category(black_box("books")));
        });
        group.bench_with_input(BenchmarkId::new("price_range", size), &store, |b, store| {
            b.iter(|| {
                store.search_by_price_range(
                    black_box(Money::from_units(100)),
                    black_box(Money::from_units(900)),
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("rating", size), &store, |b, store| {
            b.iter(|| store.search_by_rating(black_box(4.5)));
        });
    }

    group.finish();
}

fn bench_build_and_place_order(c: &mut Criterion) {
    c.bench_function("domain/build_and_place_order", |b| {
        let mut store = Store::new();
        let user_id = seed::seed_store(&mut store).unwrap();
        let laptop = store.find_product("Laptop").unwrap();
        let book = store.find_product("Book").unwrap();

        b.iter(|| {
            let mut order = Order::new();
            order.add_item(laptop.clone(), 2).unwrap();
            order.add_item(book.clone(), 3).unwrap();
            store.place_order(user_id, order).unwrap();
        });
    });
}

fn bench_authenticate(c: &mut Criterion) {
    let mut store = Store::new();
    seed::seed_store(&mut store).unwrap();
    for i in 0..1_000 {
        store
            .register_user(&format!("bench{i}"), "secret")
            .unwrap();
    }

    c.bench_function("domain/authenticate_last_user", |b| {
        b.iter(|| store.authenticate(black_box("bench999"), black_box("secret")));
    });
}

criterion_group!(
    benches,
    bench_searches,
    bench_build_and_place_order,
    bench_authenticate
);
criterion_main!(benches);
