//! Simulation report generation.

use serde::Serialize;

/// Raw counters from one simulated session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    pub purchases: u32,
    pub rejected_purchases: u32,
    pub sales: u32,
    pub total_profit: f64,
    pub final_budget: f64,
    pub final_stock: u32,
}

/// Aggregated results from multiple simulated sessions.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_sessions: u32,

    // Totals
    pub total_purchases: u64,
    pub total_rejected_purchases: u64,
    pub total_sales: u64,

    // Averages
    pub avg_purchases_per_session: f64,
    pub avg_sales_per_session: f64,
    pub avg_profit_per_sale: f64,
    pub avg_final_budget: f64,

    // Spread
    pub min_final_budget: f64,
    pub max_final_budget: f64,

    // Individual session stats for detailed analysis
    pub session_stats: Vec<SessionStats>,
}

impl SimReport {
    /// Create a new report from completed session stats.
    pub fn from_sessions(sessions: Vec<SessionStats>) -> Self {
        let num_sessions = sessions.len() as u32;
        let divisor = num_sessions.max(1) as f64;

        let total_purchases = sessions.iter().map(|s| s.purchases as u64).sum::<u64>();
        let total_rejected_purchases = sessions
            .iter()
            .map(|s| s.rejected_purchases as u64)
            .sum::<u64>();
        let total_sales = sessions.iter().map(|s| s.sales as u64).sum::<u64>();
        let total_profit = sessions.iter().map(|s| s.total_profit).sum::<f64>();

        let avg_final_budget = sessions.iter().map(|s| s.final_budget).sum::<f64>() / divisor;
        let min_final_budget = sessions
            .iter()
            .map(|s| s.final_budget)
            .fold(f64::INFINITY, f64::min);
        let max_final_budget = sessions
            .iter()
            .map(|s| s.final_budget)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            num_sessions,
            total_purchases,
            total_rejected_purchases,
            total_sales,
            avg_purchases_per_session: total_purchases as f64 / divisor,
            avg_sales_per_session: total_sales as f64 / divisor,
            avg_profit_per_sale: total_profit / (total_sales.max(1) as f64),
            avg_final_budget,
            min_final_budget: if sessions.is_empty() {
                0.0
            } else {
                min_final_budget
            },
            max_final_budget: if sessions.is_empty() {
                0.0
            } else {
                max_final_budget
            },
            session_stats: sessions,
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("── SESSIONS ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Sessions:          {}\n", self.num_sessions));
        report.push_str(&format!(
            "  Purchases:         {} ({:.1}/session)\n",
            self.total_purchases, self.avg_purchases_per_session
        ));
        report.push_str(&format!(
            "  Rejected:          {}\n",
            self.total_rejected_purchases
        ));
        report.push_str(&format!(
            "  Sales:             {} ({:.1}/session)\n",
            self.total_sales, self.avg_sales_per_session
        ));
        report.push('\n');

        report.push_str("── BUDGET ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Budget:  {:.2}\n",
            self.avg_final_budget
        ));
        report.push_str(&format!(
            "  Min Final Budget:  {:.2}\n",
            self.min_final_budget
        ));
        report.push_str(&format!(
            "  Max Final Budget:  {:.2}\n",
            self.max_final_budget
        ));
        report.push_str(&format!(
            "  Avg Profit/Sale:   {:.2}\n",
            self.avg_profit_per_sale
        ));
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let attempts = self.total_purchases + self.total_rejected_purchases;
        let rejection_rate = if attempts > 0 {
            self.total_rejected_purchases as f64 / attempts as f64 * 100.0
        } else {
            0.0
        };
        report.push_str(&format!("  Rejection Rate:    {:.1}%\n", rejection_rate));
        if rejection_rate > 50.0 {
            report.push_str("  Most purchase attempts bounce - catalog too expensive?\n");
        }
        if self.avg_profit_per_sale < 0.0 {
            report.push_str("  Average sale loses money - markup floor broken?\n");
        }

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
