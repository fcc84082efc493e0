//! Cost/benchmark stage: a fixed configuration payload.
//!
//! No randomness and no dependency on the other stages — these are the
//! business-side figures the prototype's cost views read.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostData {
    pub agent_costs: AgentCosts,
    pub ai_costs: AiCosts,
    pub benchmarks: Benchmarks,
    pub projections: Projections,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCosts {
    pub average: u32,
    pub range: SalaryRange,
    pub by_tenure: Vec<TenureBand>,
    /// Benefits load as a fraction of salary.
    pub benefits: f64,
    pub overtime_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenureBand {
    pub years: &'static str,
    pub avg_salary: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiCosts {
    pub per_contact: f64,
    pub monthly_trend: Vec<AiCostMonth>,
    /// Monthly infrastructure cost.
    pub infrastructure: u32,
    pub training_cost_per_agent: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiCostMonth {
    pub month: &'static str,
    pub per_contact: f64,
    pub total_cost: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmarks {
    pub by_industry: IndustryBenchmarks,
    pub by_region: RegionBenchmarks,
    pub handle_time: HandleTimeBenchmark,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryBenchmarks {
    pub insurance: IndustryBenchmark,
    pub telecom: IndustryBenchmark,
    pub retail: IndustryBenchmark,
    pub tech: IndustryBenchmark,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryBenchmark {
    pub deflection_rate: f64,
    #[serde(rename = "avgSLA")]
    pub avg_sla: f64,
    pub agent_cost: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionBenchmarks {
    pub toronto: RegionBenchmark,
    pub us_average: RegionBenchmark,
    pub philippines: RegionBenchmark,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionBenchmark {
    pub agent_cost: u32,
    pub benefits: f64,
}

/// Minutes per contact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleTimeBenchmark {
    pub industry: f64,
    pub our_center: f64,
    pub target: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projections {
    /// Monthly improvement potential.
    pub deflection_growth: f64,
    /// Fully loaded (salary + benefits).
    pub cost_per_agent: u32,
    pub potential_savings: PotentialSavings,
}

/// Keyed by target deflection rate, as the front end displays them.
#[derive(Debug, Clone, Serialize)]
pub struct PotentialSavings {
    #[serde(rename = "30%")]
    pub at_30: SavingsTier,
    #[serde(rename = "35%")]
    pub at_35: SavingsTier,
    #[serde(rename = "40%")]
    pub at_40: SavingsTier,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsTier {
    pub agent_reduction: u32,
    pub annual_savings: u32,
}

pub fn generate() -> CostData {
    CostData {
        agent_costs: AgentCosts {
            average: 52_000,
            range: SalaryRange { min: 45_000, max: 65_000 },
            by_tenure: vec![
                TenureBand { years: "0-1", avg_salary: 45_000, count: 28 },
                TenureBand { years: "1-3", avg_salary: 50_000, count: 35 },
                TenureBand { years: "3-5", avg_salary: 56_000, count: 20 },
                TenureBand { years: "5+",  avg_salary: 62_000, count: 11 },
            ],
            benefits: 0.32,
            overtime_rate: 1.5,
        },
        ai_costs: AiCosts {
            per_contact: 0.12,
            monthly_trend: vec![
                AiCostMonth { month: "2024-01", per_contact: 0.15, total_cost: 4_050 },
                // Billing Bot v2.
                AiCostMonth { month: "2024-03", per_contact: 0.13, total_cost: 4_225 },
                AiCostMonth { month: "2024-06", per_contact: 0.12, total_cost: 4_680 },
                // FAQ expansion.
                AiCostMonth { month: "2024-08", per_contact: 0.10, total_cost: 5_120 },
                AiCostMonth { month: "2024-12", per_contact: 0.08, total_cost: 6_240 },
            ],
            infrastructure: 2_500,
            training_cost_per_agent: 2_500,
        },
        benchmarks: Benchmarks {
            by_industry: IndustryBenchmarks {
                insurance: IndustryBenchmark { deflection_rate: 0.22, avg_sla: 0.78, agent_cost: 54_000 },
                telecom:   IndustryBenchmark { deflection_rate: 0.28, avg_sla: 0.82, agent_cost: 48_000 },
                retail:    IndustryBenchmark { deflection_rate: 0.35, avg_sla: 0.85, agent_cost: 46_000 },
                tech:      IndustryBenchmark { deflection_rate: 0.42, avg_sla: 0.88, agent_cost: 65_000 },
            },
            by_region: RegionBenchmarks {
                toronto:     RegionBenchmark { agent_cost: 54_000, benefits: 0.35 },
                us_average:  RegionBenchmark { agent_cost: 48_000, benefits: 0.30 },
                philippines: RegionBenchmark { agent_cost: 18_000, benefits: 0.15 },
            },
            handle_time: HandleTimeBenchmark {
                industry: 5.5,
                our_center: 6.0,
                target: 5.0,
            },
        },
        projections: Projections {
            deflection_growth: 0.02,
            cost_per_agent: 68_500,
            potential_savings: PotentialSavings {
                at_30: SavingsTier { agent_reduction: 8,  annual_savings: 548_000 },
                at_35: SavingsTier { agent_reduction: 12, annual_savings: 822_000 },
                at_40: SavingsTier { agent_reduction: 16, annual_savings: 1_096_000 },
            },
        },
    }
}
