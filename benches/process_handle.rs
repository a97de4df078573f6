use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pidkit::process::action::alive::is_process_alive;
use pidkit::process::handle::ProcessHandle;

fn bench_process_handle(c: &mut Criterion) {
    c.bench_function("handle_current", |b| {
        b.iter(|| black_box(ProcessHandle::current()))
    });

    c.bench_function("handle_of_pid", |b| {
        b.iter(|| black_box(ProcessHandle::of(std::process::id())))
    });

    c.bench_function("is_alive_current", |b| {
        b.iter(|| black_box(is_process_alive(std::process::id())))
    });

    c.bench_function("is_alive_dead_pid", |b| {
        b.iter(|| black_box(is_process_alive(999_999_999)))
    });

    c.bench_function("info_current", |b| {
        let handle = ProcessHandle::current();
        b.iter(|| black_box(handle.info()))
    });
}

criterion_group!(benches, bench_process_handle);
criterion_main!(benches);
