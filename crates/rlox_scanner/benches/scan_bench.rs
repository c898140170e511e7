use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rlox_diagnostics::DiagnosticCollection;
use rlox_scanner::Scanner;

// A medium-size Lox source exercising every lexical category
const LOX_SOURCE: &str = r#"
// Fibonacci with a lookup table
class Memo {
  init() {
    this.cache_size = 0;
  }

  lookup(n) {
    if (n <= 1) { return n; }
    return nil;
  }
}

fun fib(n) {
  if (n <= 1) { return n; }
  return fib(n - 1) + fib(n - 2);
}

var memo = Memo();
var limit = 25;

for (var i = 0; i < limit; i = i + 1) {
  var cached = memo.lookup(i);
  if (cached == nil and i > 1) {
    print fib(i);
  } else {
    print cached;
  }
}

var banner = "fib table complete";
var ratio = 1.6180339887;
var sum = 0;

while (sum < 100) {
  sum = sum + ratio * 2;
}

print banner;
print "golden ratio: " + "1.618";
print !false == true;
"#;

fn bench_scan_lox(c: &mut Criterion) {
    c.bench_function("scan_lox_medium", |b| {
        b.iter(|| {
            let mut diagnostics = DiagnosticCollection::new();
            let scanner = Scanner::new(black_box(LOX_SOURCE));
            let tokens = scanner.scan_tokens(&mut diagnostics);
            black_box(tokens);
        });
    });
}

criterion_group!(benches, bench_scan_lox);
criterion_main!(benches);
