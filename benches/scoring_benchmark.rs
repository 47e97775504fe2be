use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flight_difficulty::models::{
    BagRecord, FlightKey, FlightRecord, FlightTable, PassengerLoad, PnrRecord, RemarkRecord,
};
use flight_difficulty::processors::ranker::dense_ranks;
use flight_difficulty::processors::DifficultyPipeline;
use flight_difficulty::readers::SourceTables;
use flight_difficulty::utils::parse_timestamp;

// Synthetic schedule: `flights_per_day` departures over `days` days
fn create_test_tables(flights_per_day: usize, days: usize) -> SourceTables {
    let base_date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    let mut flights = Vec::with_capacity(flights_per_day * days);
    let mut pnr = Vec::new();
    let mut remarks = Vec::new();
    let mut bags = Vec::new();

    for day in 0..days {
        let date = base_date + chrono::Duration::days(day as i64);
        let date_key = date.format("%Y-%m-%d").to_string();

        for n in 0..flights_per_day {
            let key = FlightKey::new((1000 + n).to_string(), date_key.clone());
            let scheduled = date.and_hms_opt(6 + (n % 16) as u32, 0, 0).unwrap();
            let delay = ((n * 7 + day * 3) % 90) as i64 - 10;

            flights.push(FlightRecord {
                key: key.clone(),
                scheduled_departure: Some(scheduled),
                actual_departure: Some(scheduled + chrono::Duration::minutes(delay)),
                scheduled_ground_time: Some(30.0 + (n % 40) as f64),
                minimum_turn_time: Some(45.0),
                columns: vec![key.flight_number.clone(), key.departure_date.clone()],
            });

            for p in 0..3 {
                pnr.push(PnrRecord {
                    key: key.clone(),
                    passengers: PassengerLoad {
                        total_pax: (20 + (n + p) % 60) as u32,
                        lap_child_count: (p % 2) as u32,
                        ..Default::default()
                    },
                });
            }

            for _ in 0..(n % 4) {
                remarks.push(RemarkRecord { key: key.clone() });
            }

            for b in 0..(n % 12) {
                bags.push(BagRecord {
                    key: key.clone(),
                    bag_type: if b % 3 == 0 { "Transfer" } else { "Checked" }.to_string(),
                });
            }
        }
    }

    SourceTables {
        flights: FlightTable::new(
            vec!["flight_number".to_string(), "scheduled_departure_date_local".to_string()],
            flights,
        ),
        pnr,
        remarks,
        bags,
        airports: Vec::new(),
    }
}

fn benchmark_pipeline(c: &mut Criterion) {
    let tables = create_test_tables(200, 14);

    c.bench_function("difficulty_pipeline", |b| {
        b.iter(|| {
            let output = DifficultyPipeline::new().run(black_box(&tables), None);
            black_box(output.table.len())
        })
    });
}

fn benchmark_dense_ranks(c: &mut Criterion) {
    let scores: Vec<f64> = (0..1_000).map(|i| ((i * 37) % 250) as f64 * 0.4).collect();

    c.bench_function("dense_ranks", |b| {
        b.iter(|| black_box(dense_ranks(black_box(&scores))))
    });
}

fn benchmark_timestamp_parsing(c: &mut Criterion) {
    let values = [
        "2025-08-04T17:57:00Z",
        "2025-08-04 17:57:00",
        "08/04/2025 17:57",
        "2025-08-04T17:57",
        "not a time",
    ];

    c.bench_function("timestamp_parsing", |b| {
        b.iter(|| {
            let parsed = values
                .iter()
                .filter(|v| parse_timestamp(black_box(v)).is_some())
                .count();
            black_box(parsed)
        })
    });
}

fn benchmark_varying_schedule_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_by_flights_per_day");

    for &size in &[50, 200, 800] {
        group.bench_with_input(BenchmarkId::new("flights", size), &size, |b, &size| {
            let tables = create_test_tables(size, 7);
            b.iter(|| {
                let output = DifficultyPipeline::new().run(&tables, None);
                black_box(output.days.len())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pipeline,
    benchmark_dense_ranks,
    benchmark_timestamp_parsing,
    benchmark_varying_schedule_sizes
);
criterion_main!(benches);
