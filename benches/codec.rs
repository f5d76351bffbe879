use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sample_csv::{
    escape, format_line, from_line, split_line, to_line, CsvOptions, CsvWriter, LineBreaks,
    RecordReader, SampleRecord,
};

fn sample(i: u64, message: &str) -> SampleRecord {
    SampleRecord {
        time_stamp: 1_700_000_000_000 + i as i64,
        elapsed: i % 500,
        label: format!("request {}", i % 7),
        response_code: "200".to_string(),
        response_message: message.to_string(),
        thread_name: format!("Thread Group 1-{}", i % 16),
        data_type: "text".to_string(),
        success: i % 13 != 0,
        failure_message: String::new(),
        bytes: 1024 + i,
        sent_bytes: 256,
        grp_threads: 16,
        all_threads: 16,
        url: "https://example.org/api".to_string(),
        latency: i % 300,
        idle_time: 0,
        connect: i % 40,
    }
}

fn benchmark_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");
    group.bench_function("plain", |b| {
        b.iter(|| escape(black_box("normal message with no new line"), ','))
    });
    group.bench_function("quoted", |b| {
        b.iter(|| escape(black_box("message with \"quotes\", commas,\r\nand breaks"), ','))
    });
    group.finish();
}

fn benchmark_format_split(c: &mut Criterion) {
    let fields = sample(42, "message with comma, really").to_fields();
    let line = format_line(&fields, ',');

    c.bench_function("format_sample_line", |b| {
        b.iter(|| format_line(black_box(&fields), ','))
    });
    c.bench_function("split_sample_line", |b| {
        b.iter(|| split_line(black_box(&line), ','))
    });
}

fn benchmark_typed(c: &mut Criterion) {
    let record = sample(7, "Something happened:\nmessage with new line");
    let line = record.to_line(',');

    c.bench_function("serialize_sample", |b| b.iter(|| to_line(black_box(&record))));
    c.bench_function("deserialize_sample", |b| {
        b.iter(|| from_line::<SampleRecord>(black_box(&line)))
    });
}

fn benchmark_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_records");

    for size in [10u64, 100, 1000].iter() {
        let options = CsvOptions::new().with_line_breaks(LineBreaks::Raw);
        let mut writer = CsvWriter::new(Vec::new(), options.clone());
        for i in 0..*size {
            let message = if i % 3 == 0 { "line one\nline two" } else { "OK" };
            writer.serialize(&sample(i, message)).unwrap();
        }
        let bytes = writer.into_inner().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| {
                let mut reader = RecordReader::with_options(black_box(bytes.as_slice()), &options);
                reader.records().count()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_escape,
    benchmark_format_split,
    benchmark_typed,
    benchmark_reader
);
criterion_main!(benches);
