// accessgen-core/src/domain/access/generator.rs

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use crate::domain::access::catalog::WebsiteCatalog;
use crate::domain::access::counters::AccessCounters;
use crate::domain::access::policy::GenerationPolicy;
use crate::domain::access::record::{AccessRecord, Department, RequestStatus, format_user_id};
use crate::domain::error::DomainError;
use crate::domain::ports::PersonSource;

pub const REASON_HISTORICAL: &str = "Historical access exists";
pub const REASON_FIRST_ACCESS: &str = "First access granted";
pub const REASON_NO_PRIOR_ACCESS: &str = "No prior access";

pub fn prohibited_reason(website: &str) -> String {
    format!("Access to {} is strictly prohibited", website)
}

fn site_out_of_range(site_idx: usize, catalog: &WebsiteCatalog) -> DomainError {
    DomainError::InvalidCatalog(format!(
        "no website at index {} (catalog has {})",
        site_idx,
        catalog.len()
    ))
}

/// Output of one generation run: the table and the counters that shaped it.
#[derive(Debug, Clone)]
pub struct Generation {
    pub records: Vec<AccessRecord>,
    pub counters: AccessCounters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDecision {
    pub status: RequestStatus,
    pub reason: String,
}

/// Generates `num_rows` access records.
///
/// Row `k` depends on the outcome of every row before it: approvals feed
/// the least-approved selection and the auto-approval rule.
#[instrument(skip(catalog, policy, people, rng))]
pub fn generate<P, R>(
    num_rows: usize,
    catalog: &WebsiteCatalog,
    policy: &GenerationPolicy,
    people: &mut P,
    rng: &mut R,
) -> Result<Generation, DomainError>
where
    P: PersonSource,
    R: Rng + ?Sized,
{
    let mut counters = AccessCounters::new(catalog);
    let mut records = Vec::with_capacity(num_rows);

    for row in 1..=num_rows {
        let department = *Department::ALL
            .choose(rng)
            .unwrap_or(&Department::Engineering);

        let name = people.name(rng);
        let email = people.email(rng);
        let reporting_manager = people.name(rng);

        let site_idx = select_website(catalog, &counters, policy, rng)?;
        let website = catalog
            .get(site_idx)
            .ok_or_else(|| site_out_of_range(site_idx, catalog))?
            .name
            .clone();

        let decision = resolve_status(catalog, &mut counters, site_idx, policy, rng)?;
        debug!(row, %website, status = %decision.status, "Row generated");

        records.push(AccessRecord {
            user_id: format_user_id(row),
            name,
            email,
            department,
            reporting_manager,
            website,
            request_status: decision.status,
            reason: decision.reason,
        });
    }

    Ok(Generation { records, counters })
}

/// Picks a catalog index: the least-approved site with probability
/// `reuse_probability`, otherwise any site uniformly.
///
/// `counters` must have been built from `catalog`; an empty catalog or a
/// least-approved index outside it is an error.
pub fn select_website<R: Rng + ?Sized>(
    catalog: &WebsiteCatalog,
    counters: &AccessCounters,
    policy: &GenerationPolicy,
    rng: &mut R,
) -> Result<usize, DomainError> {
    if catalog.is_empty() {
        return Err(DomainError::InvalidCatalog(
            "at least one website is required".to_string(),
        ));
    }

    let site_idx = if rng.r#gen::<f64>() < policy.reuse_probability {
        counters.least_approved().unwrap_or(0)
    } else {
        rng.gen_range(0..catalog.len())
    };

    if site_idx >= catalog.len() {
        return Err(site_out_of_range(site_idx, catalog));
    }
    Ok(site_idx)
}

/// Decides the outcome of a request for the site at `site_idx` and updates
/// the counters accordingly. An index outside the catalog is an error and
/// leaves the counters untouched.
pub fn resolve_status<R: Rng + ?Sized>(
    catalog: &WebsiteCatalog,
    counters: &mut AccessCounters,
    site_idx: usize,
    policy: &GenerationPolicy,
    rng: &mut R,
) -> Result<StatusDecision, DomainError> {
    let site = catalog
        .get(site_idx)
        .ok_or_else(|| site_out_of_range(site_idx, catalog))?;

    if site.completely_rejected {
        counters.record_rejection(site_idx);
        return Ok(StatusDecision {
            status: RequestStatus::Rejected,
            reason: prohibited_reason(&site.name),
        });
    }

    let decision = if counters.approved_at(site_idx) > policy.auto_approve_after {
        StatusDecision {
            status: RequestStatus::Approved,
            reason: REASON_HISTORICAL.to_string(),
        }
    } else if rng.r#gen::<f64>() < policy.approval_weight {
        StatusDecision {
            status: RequestStatus::Approved,
            reason: REASON_FIRST_ACCESS.to_string(),
        }
    } else {
        StatusDecision {
            status: RequestStatus::Rejected,
            reason: REASON_NO_PRIOR_ACCESS.to_string(),
        }
    };

    if decision.status.is_approved() {
        counters.record_approval(site_idx);
    }
    Ok(decision)
}
