use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vellum_dsl::{parse, Category};

const SCHEMA_MIN: &str = "event UserRegistered { }";

const SCHEMA_FULL: &str = r#"
command CreateUser {
  type typeName
  version currentVersion
  timestamp createdAt
  string username = "defaultUser"
  string email
  boolean isActive = true
  int age
  string[] roles = { "user", "member" }
  int[] permissions = { 1, 2, 3 }
  data.PersonalInfo personalInfo
}
"#;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("dsl/parse_min", |b| {
        b.iter(|| {
            let result = parse(black_box(SCHEMA_MIN), None);
            black_box(result.success);
        });
    });

    c.bench_function("dsl/parse_full", |b| {
        b.iter(|| {
            let result = parse(black_box(SCHEMA_FULL), Some(Category::Command));
            black_box(result.specification.map(|s| s.fields.len()));
        });
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
