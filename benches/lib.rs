use criterion::criterion_main;

mod lookups;

criterion_main!(lookups::benches_lookups);
