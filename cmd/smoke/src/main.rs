//! gresult/galloc end-to-end smoke test
//!
//! Exercises the full status stack:
//!   Part A — Integral statuses: flag shapes, the zero tie-break, equality
//!   Part B — Status-only results and rendering
//!   Part C — Pointer statuses round-tripped through the aligned allocator
//!
//! Run: ./target/release/smoke

use gresult::{ErrorCode, Generic, NoPayload, Pointer, Status, StatusCode};

use galloc::{allocate, allocate_status, deallocate, NoopSink, StderrSink};

// ── Test harness ──

struct TestRunner {
    total: usize,
    passed: usize,
    failed: usize,
}

const LINE: &str = "────────────────────────────────────────────────────────────";

impl TestRunner {
    fn new() -> Self {
        Self { total: 0, passed: 0, failed: 0 }
    }

    fn section(&self, name: &str) {
        println!("\n{}", LINE);
        println!("  {}", name);
        println!("{}", LINE);
    }

    fn pass(&mut self, name: &str) {
        self.total += 1;
        self.passed += 1;
        println!("  [{:2}] {:<52} PASS", self.total, name);
    }

    fn fail(&mut self, name: &str, reason: &str) {
        self.total += 1;
        self.failed += 1;
        println!("  [{:2}] {:<52} FAIL: {}", self.total, name, reason);
    }

    fn check(&mut self, name: &str, ok: bool, reason: &str) {
        if ok { self.pass(name); } else { self.fail(name, reason); }
    }

    fn summary(&self) {
        println!("\n{}", LINE);
        println!(
            "  Total: {}  Passed: {}  Failed: {}",
            self.total, self.passed, self.failed
        );
        println!("{}", LINE);
    }
}

// ── Part A: integral statuses ──

fn test_integral(t: &mut TestRunner) {
    t.section("Part A: Integral statuses");

    let r = StatusCode::from_flag(5, true);
    t.check("flag(5, true) is ok", r.ok() && r.error() == ErrorCode::OK, &format!("{}", r));
    t.check("flag(5, true) keeps value", r.value() == 5, &format!("value = {}", r.value()));

    let r = StatusCode::from_flag(5, false);
    t.check(
        "flag(5, false) reinterprets value as code",
        !r.ok() && r.error() == ErrorCode::new(5) && r.value() == 5,
        &format!("{}", r),
    );

    let r = StatusCode::from_flag(0, false);
    t.check(
        "flag(0, false) collapses to uninitialized",
        r.error() == ErrorCode::UNINIT,
        &format!("error = {}", r.error()),
    );

    let r = StatusCode::new();
    t.check("default status is not ok", !r.ok(), "expected fail state");

    t.check(
        "structural equality",
        StatusCode::from_flag(5, true) == StatusCode::from_flag(5, true)
            && StatusCode::from_flag(5, true) != StatusCode::from_flag(5, false),
        "storage compare mismatch",
    );

    let rendered = format!("{}", StatusCode::from_flag(7, true));
    t.check(
        "integral rendering",
        rendered == "succ, value = 7",
        &rendered,
    );

    let r = Status::<Generic<String>>::from_value("ready".to_string());
    t.check("generic payload is ok", r.ok() && *r == "ready", &format!("{}", r));
}

// ── Part B: status-only results ──

fn test_void(t: &mut TestRunner) {
    t.section("Part B: Status-only results");

    let r = Status::<NoPayload>::new();
    t.check(
        "uninitialized void status",
        !r.ok() && r.error().is_uninit(),
        &format!("{}", r),
    );

    let r = Status::<NoPayload>::from_error(ErrorCode::OK);
    t.check("explicit no-error is ok", r.ok(), &format!("{}", r));

    let r = Status::<NoPayload>::from_error(ErrorCode::new(110));
    let rendered = format!("{}", r);
    t.check(
        "void rendering carries the code",
        rendered == "fail, error = 110",
        &rendered,
    );
}

// ── Part C: pointer statuses through the allocator ──

fn test_alloc(t: &mut TestRunner) {
    t.section("Part C: Pointer statuses / aligned allocator");

    let sink = StderrSink::from_env();

    let r = allocate_status(&sink, 64, 16);
    t.check("allocate_status(64, 16) is ok", r.ok() && !r.value().is_null(), &format!("{}", r));
    if r.ok() {
        let p = r.value();
        t.check("alignment honored", p as usize % 16 == 0, &format!("p = {:p}", p));
        unsafe {
            std::ptr::write_bytes(p, 0x5A, 64);
            t.check("storage is writable", *p == 0x5A && *p.add(63) == 0x5A, "readback mismatch");
            deallocate(&sink, p, 64, 16);
        }
        t.pass("deallocate(p, 64, 16)");
    }

    t.check(
        "allocate(0, 8) returns null",
        allocate(&NoopSink, 0, 8).is_null(),
        "expected null",
    );

    // Bad alignment goes through the no-op sink here to keep the output clean.
    t.check(
        "allocate(16, 3) rejected",
        allocate(&NoopSink, 16, 3).is_null(),
        "expected null",
    );

    unsafe { deallocate(&NoopSink, std::ptr::null_mut(), 16, 8) };
    t.pass("deallocate(null) is a no-op");

    let r = allocate_status(&NoopSink, 0, 8);
    t.check(
        "failed acquisition is NO_RESOURCE",
        !r.ok() && r.error() == ErrorCode::NO_RESOURCE,
        &format!("{}", r),
    );

    let r = Status::<Pointer<u8>>::null();
    let rendered = format!("{}", r);
    t.check(
        "null-pointer rendering",
        rendered == "fail, value = 0x0, error = -1",
        &rendered,
    );
}

fn main() {
    println!("gresult/galloc smoke test");

    let mut t = TestRunner::new();

    test_integral(&mut t);
    test_void(&mut t);
    test_alloc(&mut t);

    t.summary();
    std::process::exit(if t.failed > 0 { 1 } else { 0 });
}
