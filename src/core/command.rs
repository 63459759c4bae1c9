use crate::config::CliConfig;
use crate::core::series::arithmetic_sum;
use crate::domain::model::{SuccessReport, Summation};
use crate::utils::error::Result;
use crate::utils::validation::parse_positive_integer;
use std::io::Write;
use std::time::Instant;

/// Validate-then-compute-then-emit flow for one invocation.
pub struct SumCommand {
    config: CliConfig,
}

impl SumCommand {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn compute(&self) -> Result<Summation> {
        let raw = self.config.number()?;
        tracing::debug!("Raw argument: {:?}", raw);

        let n = parse_positive_integer(raw)?;
        let total = arithmetic_sum(n)?;
        tracing::debug!("sum(0..{}) = {}", n, total);

        Ok(Summation { n, total })
    }

    /// Renders the success line. Nothing is written unless the computation
    /// succeeded.
    pub fn render(&self) -> Result<String> {
        let started = Instant::now();
        let summation = self.compute()?;

        if !self.config.json {
            return Ok(summation.total.to_string());
        }

        let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;
        let report = SuccessReport {
            status: "success".to_string(),
            data: summation.total,
            calculation: summation.calculation(),
            time_taken_ms: format!("{:.3} ms", elapsed_ms),
        };
        Ok(serde_json::to_string(&report)?)
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let line = self.render()?;
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
