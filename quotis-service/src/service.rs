use crate::stats::ServiceStats;
use chrono::Utc;
use quotis_advisor::{assess_market, RecommendationEngine, ANALYTICS_TTL, RECOMMENDATION_TTL};
use quotis_catalog::{CurrencyConverter, ExchangeRates, PricingCalculator};
use quotis_core::{validate_request, PriceRecordSource, PricingError};
use quotis_shared::{
    HealthCheck, HealthState, HealthStatus, PriceAnalytics, PricingFacts, PricingRequest,
    PricingResponse, RawPriceRecord, RecommendationBundle, ResponseMeta, StatsSnapshot,
    TaxBreakdown,
};
use quotis_store::{analytics_key, pricing_key, recommendation_key, TieredCache};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Orchestrates the pricing pipeline and owns the three caches (facts,
/// analytics, recommendations). Cheap to share behind an `Arc`; every
/// method takes `&self`.
pub struct PricingService<S> {
    source: Arc<S>,
    calculator: PricingCalculator,
    recommender: RecommendationEngine,
    price_cache: TieredCache<PricingFacts>,
    analytics_cache: TieredCache<PriceAnalytics>,
    recommendation_cache: TieredCache<RecommendationBundle>,
    stats: Arc<ServiceStats>,
    probe_part_id: u64,
}

impl<S: PriceRecordSource> PricingService<S> {
    pub fn new(source: Arc<S>, rates: Arc<dyn ExchangeRates>, probe_part_id: u64) -> Self {
        Self {
            source,
            calculator: PricingCalculator::new(CurrencyConverter::new(rates)),
            recommender: RecommendationEngine::new(),
            price_cache: TieredCache::new("pricing"),
            analytics_cache: TieredCache::new("analytics"),
            recommendation_cache: TieredCache::new("recommendations"),
            stats: Arc::new(ServiceStats::default()),
            probe_part_id,
        }
    }

    /// Resolve pricing for one request. Always returns a response object;
    /// failures in the pipeline are converted, counted, and logged here.
    pub async fn get_pricing(&self, request: PricingRequest) -> PricingResponse {
        let started = Instant::now();
        let request_id = Uuid::new_v4();
        self.stats.record_request();

        if let Err(err) = validate_request(&request) {
            return self.failure(request_id, started, err);
        }

        let key = pricing_key(
            request.part_id,
            request.quantity,
            request.tier,
            request.currency,
        );
        if let Some(facts) = self.price_cache.get(&key) {
            self.stats.record_cache_hit();
            return self.assemble(request_id, started, true, facts, &request, None);
        }

        let candidates = match self.source.find_eligible_prices(request.part_id).await {
            Ok(candidates) => candidates,
            Err(err) => return self.failure(request_id, started, err.into()),
        };
        if candidates.is_empty() {
            return self.failure(
                request_id,
                started,
                PricingError::NoPriceAvailable(request.part_id),
            );
        }

        let compute_started = Instant::now();
        let facts = self
            .calculator
            .compute(&candidates[0], &request, &candidates);
        self.stats.record_compute_time(compute_started.elapsed());

        self.price_cache
            .put(key, facts.clone(), request.tier.cache_ttl());
        self.assemble(request_id, started, false, facts, &request, Some(&candidates))
    }

    /// Clear all three caches unconditionally.
    pub fn invalidate_all_caches(&self) {
        self.price_cache.invalidate_all();
        self.analytics_cache.invalidate_all();
        self.recommendation_cache.invalidate_all();
        info!("all pricing caches invalidated");
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Lightweight self-test: probes the record source and reports cache
    /// occupancy. Never mutates cache state.
    pub async fn health(&self) -> HealthStatus {
        let mut checks = Vec::new();
        match self.source.find_eligible_prices(self.probe_part_id).await {
            Ok(records) => {
                checks.push(HealthCheck {
                    name: "price_source_reachable".to_string(),
                    passed: true,
                    detail: None,
                });
                let now = Utc::now();
                let well_formed = records.iter().all(|record| record.is_eligible_at(now));
                checks.push(HealthCheck {
                    name: "price_source_well_formed".to_string(),
                    passed: well_formed,
                    detail: if well_formed {
                        None
                    } else {
                        Some("source returned an ineligible record".to_string())
                    },
                });
            }
            Err(err) => {
                checks.push(HealthCheck {
                    name: "price_source_reachable".to_string(),
                    passed: false,
                    detail: Some(err.to_string()),
                });
            }
        }

        let status = if checks.iter().all(|check| check.passed) {
            HealthState::Ok
        } else {
            HealthState::Degraded
        };
        HealthStatus {
            status,
            cache_entry_count: self.price_cache.len()
                + self.analytics_cache.len()
                + self.recommendation_cache.len(),
            checks,
        }
    }

    fn assemble(
        &self,
        request_id: Uuid,
        started: Instant,
        cache_hit: bool,
        facts: PricingFacts,
        request: &PricingRequest,
        candidates: Option<&[RawPriceRecord]>,
    ) -> PricingResponse {
        let recommendations = Some(self.recommendations_for(request, &facts));
        let analytics = if request.include_analytics {
            self.analytics_for(request.part_id, &facts, candidates)
        } else {
            None
        };
        let tax_breakdown = if request.include_tax_breakdown {
            Some(TaxBreakdown::from_facts(&facts))
        } else {
            None
        };
        let discounts = if request.include_discounts {
            Some(facts.bulk_discounts.clone())
        } else {
            None
        };

        PricingResponse {
            success: true,
            facts: Some(facts),
            recommendations,
            analytics,
            tax_breakdown,
            discounts,
            error: None,
            meta: ResponseMeta {
                request_id,
                cache_hit,
                response_time_ms: elapsed_ms(started),
            },
        }
    }

    fn recommendations_for(
        &self,
        request: &PricingRequest,
        facts: &PricingFacts,
    ) -> RecommendationBundle {
        let key = recommendation_key(request.part_id, request.quantity);
        if let Some(bundle) = self.recommendation_cache.get(&key) {
            return bundle;
        }
        let bundle = self.recommender.recommend(request, facts);
        self.stats.record_recommendation();
        self.recommendation_cache
            .put(key, bundle.clone(), RECOMMENDATION_TTL);
        bundle
    }

    /// Analytics are advisory: when the price cache answered the request
    /// and the analytics cache is cold, the section is skipped instead of
    /// triggering a second storage query.
    fn analytics_for(
        &self,
        part_id: u64,
        facts: &PricingFacts,
        candidates: Option<&[RawPriceRecord]>,
    ) -> Option<PriceAnalytics> {
        let key = analytics_key(part_id);
        if let Some(analytics) = self.analytics_cache.get(&key) {
            return Some(analytics);
        }
        let candidates = candidates?;
        let analytics = assess_market(facts.unit_gross, candidates);
        self.analytics_cache
            .put(key, analytics.clone(), ANALYTICS_TTL);
        Some(analytics)
    }

    fn failure(&self, request_id: Uuid, started: Instant, err: PricingError) -> PricingResponse {
        self.stats.record_error();
        match &err {
            PricingError::UpstreamUnavailable(source_err) => {
                error!(error = %source_err, "price source query failed");
            }
            other => warn!(error = %other, "pricing request rejected"),
        }
        PricingResponse::failure(
            err.to_string(),
            ResponseMeta {
                request_id,
                cache_hit: false,
                response_time_ms: elapsed_ms(started),
            },
        )
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
