use once_cell::sync::OnceCell;

use contracts::shared::progress::{self, ProgressStatus};

use super::config::TargetsConfig;

/// Hierarchy level a target applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetTier {
    Company,
    Branch,
    Product,
}

/// Resolves an entity's sales target from the configured lookup tables.
///
/// Lookup is keyed by the entity's stable business code, never its display
/// name; entities without an explicit entry fall back to the tier default.
/// Resolution is total: it always returns a number.
#[derive(Debug, Clone)]
pub struct TargetResolver {
    config: TargetsConfig,
}

impl TargetResolver {
    pub fn new(config: TargetsConfig) -> Self {
        Self { config }
    }

    pub fn resolve(&self, tier: TargetTier, code: &str) -> f64 {
        let (table, default) = match tier {
            TargetTier::Company => (&self.config.company, self.config.company_default),
            TargetTier::Branch => (&self.config.branch, self.config.branch_default),
            TargetTier::Product => (&self.config.product, self.config.product_default),
        };
        table.get(code).copied().unwrap_or(default)
    }

    /// Target plus derived progress/status for one entity.
    pub fn assess(&self, tier: TargetTier, code: &str, current: f64) -> TargetAssessment {
        let target = self.resolve(tier, code);
        TargetAssessment {
            target,
            progress_percent: progress::progress_percent(current, target),
            status: progress::classify(current, target),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetAssessment {
    pub target: f64,
    pub progress_percent: Option<f64>,
    pub status: Option<ProgressStatus>,
}

static RESOLVER: OnceCell<TargetResolver> = OnceCell::new();

pub fn init(config: TargetsConfig) -> anyhow::Result<()> {
    RESOLVER
        .set(TargetResolver::new(config))
        .map_err(|_| anyhow::anyhow!("Target resolver already initialized"))
}

pub fn resolver() -> &'static TargetResolver {
    RESOLVER
        .get()
        .expect("Target resolver has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;

    fn demo_resolver() -> TargetResolver {
        // Embedded default config carries the demo target tables
        let config: Config = toml::from_str(
            r#"
            [database]
            path = "x.db"

            [targets.company]
            "CMP-TECHCORP" = 100000.0

            [targets.branch]
            "BR-CENTRAL" = 50000.0
            "#,
        )
        .unwrap();
        TargetResolver::new(config.targets)
    }

    #[test]
    fn test_explicit_entry_wins() {
        let r = demo_resolver();
        assert_eq!(r.resolve(TargetTier::Company, "CMP-TECHCORP"), 100_000.0);
        assert_eq!(r.resolve(TargetTier::Branch, "BR-CENTRAL"), 50_000.0);
    }

    #[test]
    fn test_unknown_code_falls_back_to_tier_default() {
        let r = demo_resolver();
        assert_eq!(r.resolve(TargetTier::Company, "CMP-UNKNOWN"), 50_000.0);
        assert_eq!(r.resolve(TargetTier::Branch, "BR-UNKNOWN"), 20_000.0);
    }

    #[test]
    fn test_product_tier_is_flat() {
        // No per-product entries shipped: every product resolves to the
        // flat product default regardless of code.
        let r = demo_resolver();
        assert_eq!(r.resolve(TargetTier::Product, "PRD-LAPTOP"), 5_000.0);
        assert_eq!(r.resolve(TargetTier::Product, "PRD-MOUSE"), 5_000.0);
    }

    #[test]
    fn test_assess_embeds_status() {
        let r = demo_resolver();
        let a = r.assess(TargetTier::Company, "CMP-TECHCORP", 100_000.0);
        assert_eq!(a.target, 100_000.0);
        assert_eq!(a.progress_percent, Some(100.0));
        assert_eq!(
            a.status,
            Some(contracts::shared::progress::ProgressStatus::OnTrack)
        );
    }
}
