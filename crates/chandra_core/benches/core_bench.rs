use chandra_core::{
    Body, EphemerisOracle, OracleError, StateVector, Zodiac, nakshatra_from_longitude,
    report_for_julian_day,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

struct LinearMoon;

impl EphemerisOracle for LinearMoon {
    fn query(&self, jd: f64, _: Body, zodiac: Zodiac) -> Result<StateVector, OracleError> {
        let tropical = (218.316 + 13.176_358 * (jd - 2_451_545.0)).rem_euclid(360.0);
        let lon = match zodiac {
            Zodiac::Tropical => tropical,
            Zodiac::Sidereal => (tropical - 24.2).rem_euclid(360.0),
        };
        Ok(StateVector::from_array([lon, 0.0, 0.00257, 13.18, 0.0, 0.0]))
    }

    fn ayanamsa(&self, _: f64) -> Result<f64, OracleError> {
        Ok(24.2)
    }
}

fn nakshatra_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("nakshatra");
    group.bench_function("from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(346.666_666_666_666_7)))
    });
    group.finish();
}

fn report_bench(c: &mut Criterion) {
    let oracle = LinearMoon;
    let mut group = c.benchmark_group("report");
    group.bench_function("resolve_and_index", |b| {
        b.iter(|| report_for_julian_day(&oracle, black_box(2_460_974.327_083_333)))
    });
    group.bench_function("render_detail", |b| {
        let report = report_for_julian_day(&oracle, 2_460_974.327_083_333);
        b.iter(|| report.as_ref().map(|r| r.render(black_box(true))))
    });
    group.finish();
}

criterion_group!(benches, nakshatra_bench, report_bench);
criterion_main!(benches);
