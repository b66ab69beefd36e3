
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use course_table::{*};

pub fn lookup_benchmark(c: &mut Criterion) {

    //Initialize the table with 10 records per bucket
    let mut table = Table::new(DefaultTableConfig()).unwrap();
    for id in 0..10_000u64 {
        table.insert(&Record::new(id.to_string(), format!("Course {}", 10_000 - id), String::new(), String::new())).unwrap();
    }

    //Head of its chain
    c.bench_function("lookup_chain_head", |b| b.iter(|| black_box( {
        table.lookup("42").unwrap()
    })));

    //Tail of its chain
    c.bench_function("lookup_chain_tail", |b| b.iter(|| black_box( {
        table.lookup("9042").unwrap()
    })));

    //Walks the whole chain without finding anything
    c.bench_function("lookup_missing", |b| b.iter(|| black_box( {
        table.lookup("10042").is_err()
    })));

    c.bench_function("list_all_10000", |b| b.iter(|| black_box( {
        table.list_all().len()
    })));
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
