use criterion::{Criterion, criterion_group, criterion_main};
use hash_record::hash_record::catalog::{build, descriptor_for};
use hash_record::{MemoryHashStore, MissingFieldPolicy, read_record, write_record};
use std::hint::black_box;

// ─── Test Data ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
struct Subscriber {
    id: i64,
    msisdn: String,
    area_code: String,
    location_state: i32,
    balance: f32,
    user_data: String,
    active: bool,
    scratch: String,
}

hash_record::hash_record!(Subscriber {
    id: i64 = "'id'",
    msisdn: String = "'msisdn'",
    area_code: String = "'areacode'",
    location_state: i32 = "'locationstate'",
    balance: f32 = "'balance'",
    user_data: String = "'userData'",
    active: bool = "'active'",
    scratch: String,
});

fn make_subscriber() -> Subscriber {
    Subscriber {
        id: 789,
        msisdn: "19966778899".into(),
        area_code: "6789".into(),
        location_state: 9,
        balance: 999.99,
        user_data: "{\"there\":\"are\", \"more\":\"fields\"}".into(),
        active: true,
        scratch: String::new(),
    }
}

const KEY: &str = "bench:subscriber:1";

// ═══════════════════════════════════════════════════════════════════════════
// Group 1: Catalog
// ═══════════════════════════════════════════════════════════════════════════

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    group.bench_function("build (uncached)", |b| {
        b.iter(|| build::<Subscriber>().unwrap())
    });

    group.bench_function("descriptor_for (cached)", |b| {
        b.iter(|| descriptor_for::<Subscriber>().unwrap())
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 2: Write / read against the memory store
// ═══════════════════════════════════════════════════════════════════════════

fn bench_write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_read");
    let store = MemoryHashStore::new();
    let record = make_subscriber();

    group.bench_function("field_map", |b| {
        let descriptor = descriptor_for::<Subscriber>().unwrap();
        b.iter(|| descriptor.field_map(black_box(&record)).unwrap())
    });

    group.bench_function("write_record", |b| {
        b.iter(|| write_record(&store, KEY, black_box(&record)).unwrap())
    });

    write_record(&store, KEY, &record).unwrap();
    group.bench_function("read_record", |b| {
        let mut target = Subscriber::default();
        b.iter(|| {
            read_record(&store, KEY, black_box(&mut target), MissingFieldPolicy::Lenient).unwrap()
        })
    });

    group.finish();
}

// ─── Criterion Main ─────────────────────────────────────────────────────────

criterion_group!(benches, bench_catalog, bench_write_read);
criterion_main!(benches);
