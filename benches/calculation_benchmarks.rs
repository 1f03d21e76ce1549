//! Performance benchmarks for the cake pricing engine.
//!
//! Covers the pure engine on plain, fully-optioned and template orders, a
//! batch of orders, and a full request through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use cake_pricing::api::{AppState, PriceRequest, create_router};
use cake_pricing::calculation::calculate_price;
use cake_pricing::config::{ConfigLoader, PricingRulesTable};
use cake_pricing::models::OrderConfiguration;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_rules() -> PricingRulesTable {
    ConfigLoader::load("./config/pricing.yaml").expect("Failed to load config")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn plain_order() -> OrderConfiguration {
    OrderConfiguration {
        six_inch_cakes: 1,
        eight_inch_cakes: 1,
        shape: "round".to_string(),
        icing_type: "butter".to_string(),
        ..OrderConfiguration::default()
    }
}

fn full_order() -> OrderConfiguration {
    OrderConfiguration {
        six_inch_cakes: 4,
        eight_inch_cakes: 2,
        layers: 3,
        shape: "heart".to_string(),
        flavors: strings(&["chocolate", "red-velvet", "lemon"]),
        icing_type: "fondant".to_string(),
        decorations: strings(&["flowers", "gold", "sprinkles", "unknown"]),
        dietary_restrictions: strings(&["eggless", "vegan"]),
        template: None,
        servings: Some(60),
    }
}

fn template_order() -> OrderConfiguration {
    OrderConfiguration {
        template: Some("999".to_string()),
        ..full_order()
    }
}

fn bench_engine(c: &mut Criterion) {
    let rules = load_rules();
    let mut group = c.benchmark_group("engine");

    for (name, order) in [
        ("plain", plain_order()),
        ("full", full_order()),
        ("template", template_order()),
    ] {
        group.bench_with_input(BenchmarkId::new("calculate_price", name), &order, |b, order| {
            b.iter(|| calculate_price(black_box(order), black_box(&rules)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let rules = load_rules();
    let mut group = c.benchmark_group("batch");

    for size in [100usize, 1000] {
        let orders: Vec<OrderConfiguration> = (0..size)
            .map(|i| OrderConfiguration {
                six_inch_cakes: (i % 5) as u32,
                eight_inch_cakes: 1,
                ..full_order()
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &orders, |b, orders| {
            b.iter(|| {
                orders
                    .iter()
                    .filter_map(|order| calculate_price(order, &rules).ok())
                    .map(|quote| quote.breakdown.total_price)
                    .sum::<u64>()
            })
        });
    }

    group.finish();
}

fn bench_http(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let router = create_router(AppState::new(load_rules()));
    let body = serde_json::json!({
        "sixInchCakes": "2",
        "eightInchCakes": 1,
        "layers": 2,
        "shape": "square",
        "flavors": ["chocolate"],
        "icingType": "cream-cheese",
        "decorations": ["flowers"],
        "dietaryRestrictions": ["vegan"]
    })
    .to_string();

    // Sanity check that the body parses before timing requests.
    let _: PriceRequest = serde_json::from_str(&body).expect("benchmark body should parse");

    c.bench_function("http/calculate_price", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/api/calculate-price")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap()
            }
        })
    });
}

criterion_group!(benches, bench_engine, bench_batch, bench_http);
criterion_main!(benches);
