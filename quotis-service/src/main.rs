use anyhow::Context;
use quotis_catalog::StaticRates;
use quotis_service::PricingService;
use quotis_shared::{Currency, PriceKind, PriceTier, PricingRequest, RawPriceRecord};
use quotis_store::{Config, InMemoryPriceSource};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.service.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting quotis pricing demo");

    let source = Arc::new(InMemoryPriceSource::with_records(sample_records()));
    let rates = Arc::new(StaticRates::new(
        config.rates.usd_per_eur,
        config.rates.gbp_per_eur,
    ));
    let service = PricingService::new(source, rates, config.service.health_probe_part_id);

    let requests = vec![
        PricingRequest {
            quantity: 1,
            ..PricingRequest::for_part(500)
        },
        PricingRequest {
            quantity: 50,
            tier: PriceTier::Bulk,
            currency: Currency::Usd,
            include_analytics: true,
            include_discounts: true,
            ..PricingRequest::for_part(500)
        },
        // Same parameters as the first request: served from cache.
        PricingRequest {
            quantity: 1,
            ..PricingRequest::for_part(500)
        },
        PricingRequest::for_part(999),
    ];

    for request in requests {
        let part_id = request.part_id;
        let response = service.get_pricing(request).await;
        match (&response.facts, &response.error) {
            (Some(facts), _) => tracing::info!(
                part_id,
                gross_total = facts.gross_total,
                quality = facts.quality.score,
                cache_hit = response.meta.cache_hit,
                "priced"
            ),
            (None, Some(error)) => tracing::warn!(part_id, error = %error, "pricing failed"),
            (None, None) => tracing::warn!(part_id, "empty response"),
        }
    }

    let health = service.health().await;
    tracing::info!(
        status = ?health.status,
        cache_entries = health.cache_entry_count,
        "health"
    );

    let stats = service.stats();
    tracing::info!(
        total_requests = stats.total_requests,
        cache_hits = stats.cache_hits,
        errors = stats.error_count,
        recommendations = stats.recommendations_generated,
        "service stats"
    );

    Ok(())
}

fn sample_records() -> Vec<RawPriceRecord> {
    let base = RawPriceRecord {
        part_id: 1,
        price_kind: PriceKind::List,
        sale_unit_price_gross: Some(24.99),
        sale_unit_price_net: 20.83,
        deposit_unit_price_gross: 0.0,
        deposit_unit_price_net: 0.0,
        tax_rate_percent: 20.0,
        margin_absolute: 4.5,
        sale_quantity_unit: None,
        available: true,
        valid_from: None,
        valid_to: None,
    };

    vec![
        base.clone(),
        RawPriceRecord {
            part_id: 500,
            sale_unit_price_gross: Some(119.99),
            sale_unit_price_net: 99.99,
            margin_absolute: 20.0,
            sale_quantity_unit: Some("1".to_string()),
            ..base.clone()
        },
        RawPriceRecord {
            part_id: 500,
            price_kind: PriceKind::Account,
            sale_unit_price_gross: Some(109.99),
            sale_unit_price_net: 91.66,
            margin_absolute: 15.0,
            ..base.clone()
        },
        RawPriceRecord {
            part_id: 500,
            price_kind: PriceKind::Base,
            sale_unit_price_gross: Some(129.99),
            sale_unit_price_net: 108.33,
            ..base
        },
    ]
}
