use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use common::{VillaCreateDto, VillaUpdateDto};
use service::patch::{apply_to, JsonPatch};
use service::villa::{repository::mock::MockVillaRepository, VillaService};

fn sample() -> VillaUpdateDto {
    VillaUpdateDto {
        id: 1,
        name: "Bench Villa".into(),
        details: "Benchmarks only".into(),
        rate: 120.0,
        occupancy: 3,
        sqft: 400,
        image_url: "https://img.example.com/bench.jpg".into(),
        amenity: "None".into(),
    }
}

fn bench_apply(c: &mut Criterion) {
    let doc: JsonPatch = serde_json::from_value(serde_json::json!([
        {"op": "test", "path": "/occupancy", "value": 3},
        {"op": "replace", "path": "/name", "value": "Renamed"},
        {"op": "copy", "from": "/name", "path": "/details"},
        {"op": "remove", "path": "/amenity"}
    ]))
    .unwrap();
    let target = sample();
    c.bench_function("villa_patch_apply", |b| {
        b.iter(|| apply_to(&doc, &target).unwrap());
    });
}

fn bench_service_patch(c: &mut Criterion) {
    let svc = VillaService::new(Arc::new(MockVillaRepository::default()));
    let rt = tokio::runtime::Runtime::new().unwrap();
    let created = rt
        .block_on(svc.create(VillaCreateDto {
            name: "Bench Villa".into(),
            details: String::new(),
            rate: 120.0,
            occupancy: 3,
            sqft: 400,
            image_url: "https://img.example.com/bench.jpg".into(),
            amenity: String::new(),
        }))
        .unwrap();
    let doc: JsonPatch = serde_json::from_value(serde_json::json!([
        {"op": "replace", "path": "/rate", "value": 130.0}
    ]))
    .unwrap();

    c.bench_function("villa_service_patch", |b| {
        b.iter(|| rt.block_on(svc.patch(created.id, &doc)).unwrap());
    });
}

criterion_group!(benches, bench_apply, bench_service_patch);
criterion_main!(benches);
