//! CRC benchmarks: auto dispatch, individual kernels, and XOR decode.
//!
//! Run: `cargo bench -p checksum`
//! Force a kernel: `STREAMSUM_CRC_FORCE=bytewise cargo bench -p checksum -- crc32/auto`

use checksum::{
  __internal::{
    bytewise_32_reflected, bytewise_64_msb, crc32_bitwise, crc64_bitwise_msb, slice8_32_reflected, slice8_64_msb,
  },
  Crc32, Crc64, IncrementalDigest,
  tables::{CRC32_IEEE_POLY, CRC32_IEEE_TABLES_8, CRC64_ECMA_POLY, CRC64_ECMA_TABLES_8},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 6] = [16, 64, 256, 4096, 65536, 1048576];

fn bench_auto(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/auto");
  eprintln!("crc32 backend: {}", Crc32::backend_name());
  for size in SIZES {
    let data = vec![0xA5u8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc32::checksum(data)));
    });
  }
  group.finish();

  let mut group = c.benchmark_group("crc64/auto");
  eprintln!("crc64 backend: {}", Crc64::backend_name());
  for size in SIZES {
    let data = vec![0xA5u8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc64::checksum(data)));
    });
  }
  group.finish();
}

/// Compare the kernels directly, bypassing selection.
fn bench_kernels(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc/kernels");
  for size in [16usize, 64, 4096] {
    let data = vec![0x3Cu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("crc32/reference", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc32_bitwise(CRC32_IEEE_POLY, !0, data)));
    });
    group.bench_with_input(BenchmarkId::new("crc32/bytewise", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(bytewise_32_reflected(!0, data, &CRC32_IEEE_TABLES_8[0])));
    });
    group.bench_with_input(BenchmarkId::new("crc32/slice8", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(slice8_32_reflected(!0, data, &CRC32_IEEE_TABLES_8)));
    });
    group.bench_with_input(BenchmarkId::new("crc64/reference", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc64_bitwise_msb(CRC64_ECMA_POLY, 0, data)));
    });
    group.bench_with_input(BenchmarkId::new("crc64/bytewise", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(bytewise_64_msb(0, data, &CRC64_ECMA_TABLES_8[0])));
    });
    group.bench_with_input(BenchmarkId::new("crc64/slice8", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(slice8_64_msb(0, data, &CRC64_ECMA_TABLES_8)));
    });
  }
  group.finish();
}

fn bench_xor_decode(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/xor-decode");
  let key = b"0123456789abcdef";
  for size in [4096usize, 65536, 1048576] {
    let data = vec![0x5Au8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc32::checksum_xor_decoded(&mut data.as_slice(), key, None)));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_auto, bench_kernels, bench_xor_decode);
criterion_main!(benches);
