use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rusqlite::{params, Connection};
use tempfile::TempDir;

use chargebook::database::{Database, DatabaseConfig};
use chargebook::operations::{execute_book, execute_cancel, BookOptions, CancelOptions};
use chargebook::{BookingId, BookingSlot, ChargingPointId, UserId};

const POINT_COUNTS: &[i64] = &[10, 100, 500];
const BENCH_USER: i64 = 1;

fn setup_database(points: i64) -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let db_path = temp_dir.path().join("chargebook.db");
    let db = Database::open(DatabaseConfig::new(&db_path)).expect("failed to open database");
    seed(db.connection(), points);
    (temp_dir, db)
}

fn seed(conn: &Connection, points: i64) {
    conn.execute(
        "INSERT INTO users (user_id, name, email) VALUES (?1, 'bench', 'bench@example.com')",
        [BENCH_USER],
    )
    .expect("failed to seed user");
    conn.execute(
        "INSERT INTO stations (station_id, address_street, address_city) VALUES (1, 'Bench Rd', 'Benchville')",
        [],
    )
    .expect("failed to seed station");
    for id in 1..=points {
        conn.execute(
            "INSERT INTO charging_points (charging_point_id, station_id, charging_point_state, slots_num)
             VALUES (?1, 1, 'available', 1)",
            params![id],
        )
        .expect("failed to seed charging point");
    }
}

fn slot() -> BookingSlot {
    BookingSlot::parse("2030-01-01 09:00:00").expect("valid slot")
}

fn perform_book(db: &mut Database, point: i64) -> BookingId {
    let options = BookOptions::new(UserId::new(BENCH_USER), ChargingPointId::new(point), slot());
    execute_book(db, &options, false)
        .expect("booking should succeed")
        .booking_id
        .expect("booking should return an id")
}

fn bench_book_single(c: &mut Criterion) {
    c.bench_function("book_single", |b| {
        b.iter_batched(
            || setup_database(1),
            |(temp_dir, mut db)| {
                let _temp_dir = temp_dir;
                black_box(perform_book(&mut db, 1));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_book_all_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_all_points");

    for &count in POINT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || setup_database(count),
                |(temp_dir, mut db)| {
                    let _temp_dir = temp_dir;
                    for point in 1..=count {
                        black_box(perform_book(&mut db, point));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_rejected_booking(c: &mut Criterion) {
    c.bench_function("book_rejected", |b| {
        b.iter_batched(
            || {
                let (temp_dir, mut db) = setup_database(1);
                perform_book(&mut db, 1);
                (temp_dir, db)
            },
            |(temp_dir, mut db)| {
                let _temp_dir = temp_dir;
                let options =
                    BookOptions::new(UserId::new(BENCH_USER), ChargingPointId::new(1), slot());
                black_box(execute_book(&mut db, &options, false).is_err());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_cancel(c: &mut Criterion) {
    c.bench_function("cancel_booking", |b| {
        b.iter_batched(
            || {
                let (temp_dir, mut db) = setup_database(1);
                let id = perform_book(&mut db, 1);
                (temp_dir, db, id)
            },
            |(temp_dir, mut db, id)| {
                let _temp_dir = temp_dir;
                let result = execute_cancel(&mut db, CancelOptions::new(id, UserId::new(BENCH_USER)), false)
                    .expect("cancel should succeed");
                black_box(result.actions_taken);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_upcoming(c: &mut Criterion) {
    let mut group = c.benchmark_group("upcoming_bookings");

    for &count in POINT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let (temp_dir, mut db) = setup_database(count);
                    for point in 1..=count {
                        perform_book(&mut db, point);
                    }
                    (temp_dir, db)
                },
                |(temp_dir, db)| {
                    let _temp_dir = temp_dir;
                    let now = BookingSlot::parse("2029-12-31 00:00:00").expect("valid slot");
                    let upcoming = Database::list_upcoming_bookings(
                        db.connection(),
                        UserId::new(BENCH_USER),
                        now,
                    )
                    .expect("failed to list upcoming bookings");
                    black_box(upcoming);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    booking_bench,
    bench_book_single,
    bench_book_all_points,
    bench_rejected_booking,
    bench_cancel,
    bench_upcoming
);
criterion_main!(booking_bench);
