//! Drill-down navigation state, kept free of framework types so the
//! transitions can be unit-tested directly.

use contracts::dashboards::d100_drilldown::{BranchCard, BranchDetail, ProductCard, ProductDetail};

/// A detail request in flight, failed, or completed. The summary is the
/// clicked card and is rendered immediately at every state.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailSlot<S, D> {
    Pending { summary: S },
    Ready { summary: S, detail: D },
    Failed { summary: S },
}

impl<S, D> DetailSlot<S, D> {
    pub fn summary(&self) -> &S {
        match self {
            DetailSlot::Pending { summary } => summary,
            DetailSlot::Ready { summary, .. } => summary,
            DetailSlot::Failed { summary } => summary,
        }
    }

    pub fn detail(&self) -> Option<&D> {
        match self {
            DetailSlot::Ready { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DetailSlot::Pending { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DetailSlot::Failed { .. })
    }
}

pub type BranchSlot = DetailSlot<BranchCard, BranchDetail>;
pub type ProductSlot = DetailSlot<ProductCard, ProductDetail>;

#[derive(Debug, Clone, PartialEq)]
pub enum Level {
    Company,
    Branch {
        slot: BranchSlot,
    },
    Product {
        branch: BranchSlot,
        slot: ProductSlot,
        /// Branch id the product view is scoped to.
        branch_scope: String,
    },
}

/// Fetch issued by a transition; the caller runs it and reports back with
/// the same generation.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchFetch {
    pub generation: u64,
    pub branch_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFetch {
    pub generation: u64,
    pub product_id: String,
    pub branch_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrilldownMachine {
    level: Level,
    generation: u64,
}

impl Default for DrilldownMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DrilldownMachine {
    pub fn new() -> Self {
        Self {
            level: Level::Company,
            generation: 0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Company → Branch. Only valid at the company level.
    pub fn select_branch(&mut self, summary: BranchCard) -> Option<BranchFetch> {
        if !matches!(self.level, Level::Company) {
            return None;
        }
        self.generation += 1;
        let branch_id = summary.id.clone();
        self.level = Level::Branch {
            slot: DetailSlot::Pending { summary },
        };
        Some(BranchFetch {
            generation: self.generation,
            branch_id,
        })
    }

    /// Branch → Product. Only valid at the branch level; carries the
    /// selected branch id as the product scope.
    pub fn select_product(&mut self, summary: ProductCard) -> Option<ProductFetch> {
        let Level::Branch { slot } = &self.level else {
            return None;
        };
        let branch = slot.clone();
        let branch_scope = branch.summary().id.clone();
        self.generation += 1;
        let product_id = summary.id.clone();
        let fetch = ProductFetch {
            generation: self.generation,
            product_id,
            branch_id: branch_scope.clone(),
        };
        self.level = Level::Product {
            branch,
            slot: DetailSlot::Pending { summary },
            branch_scope,
        };
        Some(fetch)
    }

    /// One level up. Product keeps the branch slot as-is so no refetch is
    /// needed; any in-flight response is invalidated.
    pub fn go_back(&mut self) {
        self.generation += 1;
        self.level = match std::mem::replace(&mut self.level, Level::Company) {
            Level::Company => Level::Company,
            Level::Branch { .. } => Level::Company,
            Level::Product { branch, .. } => Level::Branch { slot: branch },
        };
    }

    /// Apply a branch detail response. Returns false when the response is
    /// stale or the machine has moved away from the branch level.
    pub fn apply_branch_detail(&mut self, generation: u64, detail: BranchDetail) -> bool {
        if generation != self.generation {
            return false;
        }
        let Level::Branch { slot } = &mut self.level else {
            return false;
        };
        *slot = DetailSlot::Ready {
            summary: slot.summary().clone(),
            detail,
        };
        true
    }

    pub fn branch_detail_failed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        let Level::Branch { slot } = &mut self.level else {
            return false;
        };
        *slot = DetailSlot::Failed {
            summary: slot.summary().clone(),
        };
        true
    }

    pub fn apply_product_detail(&mut self, generation: u64, detail: ProductDetail) -> bool {
        if generation != self.generation {
            return false;
        }
        let Level::Product { slot, .. } = &mut self.level else {
            return false;
        };
        *slot = DetailSlot::Ready {
            summary: slot.summary().clone(),
            detail,
        };
        true
    }

    pub fn product_detail_failed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        let Level::Product { slot, .. } = &mut self.level else {
            return false;
        };
        *slot = DetailSlot::Failed {
            summary: slot.summary().clone(),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch_card(id: &str) -> BranchCard {
        BranchCard {
            id: id.to_string(),
            code: format!("BR-{}", id.to_uppercase()),
            name: format!("Branch {}", id),
            company_id: "c1".to_string(),
            location: "Somewhere".to_string(),
            total_sales: 1000.0,
            target: 20000.0,
            progress_percent: Some(5.0),
            status: Some(contracts::shared::progress::ProgressStatus::Behind),
            products: vec![],
        }
    }

    fn product_card(id: &str) -> ProductCard {
        ProductCard {
            id: id.to_string(),
            code: format!("PRD-{}", id.to_uppercase()),
            name: format!("Product {}", id),
            category: "Misc".to_string(),
            unit_price: 10.0,
            quantity_sold: 3,
            total_sales: 30.0,
            target: 5000.0,
            progress_percent: Some(0.6),
            status: Some(contracts::shared::progress::ProgressStatus::Behind),
        }
    }

    fn branch_detail(id: &str) -> BranchDetail {
        BranchDetail {
            branch: branch_card(id),
            company_id: "c1".to_string(),
            company_name: "TechCorp".to_string(),
        }
    }

    fn product_detail(id: &str) -> ProductDetail {
        ProductDetail {
            product: product_card(id),
            branch_scope: Some("b1".to_string()),
            sales: vec![],
        }
    }

    #[test]
    fn select_branch_goes_pending_and_issues_fetch() {
        let mut m = DrilldownMachine::new();
        let fetch = m.select_branch(branch_card("b1")).unwrap();
        assert_eq!(fetch.branch_id, "b1");
        let Level::Branch { slot } = m.level() else {
            panic!("expected branch level");
        };
        assert!(slot.is_pending());
        assert_eq!(slot.summary().id, "b1");
    }

    #[test]
    fn select_branch_only_from_company_level() {
        let mut m = DrilldownMachine::new();
        m.select_branch(branch_card("b1")).unwrap();
        assert!(m.select_branch(branch_card("b2")).is_none());
    }

    #[test]
    fn branch_detail_applies_with_matching_generation() {
        let mut m = DrilldownMachine::new();
        let fetch = m.select_branch(branch_card("b1")).unwrap();
        assert!(m.apply_branch_detail(fetch.generation, branch_detail("b1")));
        let Level::Branch { slot } = m.level() else {
            panic!("expected branch level");
        };
        assert!(slot.detail().is_some());
    }

    #[test]
    fn stale_branch_response_is_dropped() {
        let mut m = DrilldownMachine::new();
        let fetch = m.select_branch(branch_card("b1")).unwrap();
        m.go_back();
        assert!(!m.apply_branch_detail(fetch.generation, branch_detail("b1")));
        assert_eq!(*m.level(), Level::Company);
    }

    #[test]
    fn product_scope_is_selected_branch() {
        let mut m = DrilldownMachine::new();
        let bf = m.select_branch(branch_card("b1")).unwrap();
        m.apply_branch_detail(bf.generation, branch_detail("b1"));
        let pf = m.select_product(product_card("p1")).unwrap();
        assert_eq!(pf.branch_id, "b1");
        let Level::Product { branch_scope, .. } = m.level() else {
            panic!("expected product level");
        };
        assert_eq!(branch_scope, "b1");
    }

    #[test]
    fn back_from_product_retains_branch_slot_without_refetch() {
        let mut m = DrilldownMachine::new();
        let bf = m.select_branch(branch_card("b1")).unwrap();
        m.apply_branch_detail(bf.generation, branch_detail("b1"));
        let pf = m.select_product(product_card("p1")).unwrap();
        m.apply_product_detail(pf.generation, product_detail("p1"));
        m.go_back();
        let Level::Branch { slot } = m.level() else {
            panic!("expected branch level");
        };
        assert!(slot.detail().is_some(), "branch detail must survive back");
    }

    #[test]
    fn back_from_branch_reaches_company() {
        let mut m = DrilldownMachine::new();
        m.select_branch(branch_card("b1")).unwrap();
        m.go_back();
        assert_eq!(*m.level(), Level::Company);
    }

    #[test]
    fn failed_detail_keeps_summary() {
        let mut m = DrilldownMachine::new();
        let fetch = m.select_branch(branch_card("b1")).unwrap();
        assert!(m.branch_detail_failed(fetch.generation));
        let Level::Branch { slot } = m.level() else {
            panic!("expected branch level");
        };
        assert!(slot.is_failed());
        assert_eq!(slot.summary().id, "b1");
    }

    #[test]
    fn stale_product_response_after_back_is_dropped() {
        let mut m = DrilldownMachine::new();
        let bf = m.select_branch(branch_card("b1")).unwrap();
        m.apply_branch_detail(bf.generation, branch_detail("b1"));
        let pf = m.select_product(product_card("p1")).unwrap();
        m.go_back();
        assert!(!m.apply_product_detail(pf.generation, product_detail("p1")));
        let Level::Branch { slot } = m.level() else {
            panic!("expected branch level");
        };
        assert!(slot.detail().is_some());
    }
}
