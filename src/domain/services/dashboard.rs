//! Farm-wide totals shown on the dashboard

use serde::Serialize;

use crate::domain::entities::AppData;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub sheep_in_pen: usize,
    pub pen_count: usize,
    pub total_sales: f64,
    pub breeding_count: usize,
}

impl DashboardStats {
    /// Recomputed from scratch on every call
    pub fn compute(data: &AppData) -> Self {
        Self {
            sheep_in_pen: data.sheep.iter().filter(|s| s.is_in_pen()).count(),
            pen_count: data.pens.len(),
            total_sales: data.sales.iter().map(|s| s.total_amount).sum(),
            breeding_count: data.breeding.len(),
        }
    }
}
