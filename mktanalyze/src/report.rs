use mkt_core::models::{AnalysisResult, DisplayFlags, Estimate, FittedCurve, Observation};
use std::io::{self, Write};

/// Render the analysis as plain text, including only what the display flags enable.
///
/// The headline figures (max profit, optimal price, and elasticity) are always written.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    result: &AnalysisResult,
    display: &DisplayFlags,
) -> io::Result<()> {
    writeln!(out, "Market Demand and Supply Curves")?;

    if display.buyer_data {
        writeln!(
            out,
            "Willingness to Buy: {}",
            series(&result.demand_observations)
        )?;
    }
    if display.seller_data {
        writeln!(
            out,
            "Willingness to Sell: {}",
            series(&result.supply_observations)
        )?;
    }

    writeln!(out, "Demand Best Fit Line: {}", curve(&result.demand))?;

    if display.marginal_cost_line {
        writeln!(out, "Marginal Cost: {:.2} USD", result.marginal_cost)?;
    }
    if display.supply_curve_1 {
        writeln!(out, "Supply Curve 1: {}", estimate(&result.supply, curve))?;
    }
    if display.supply_curve_2 {
        let text = match &result.alternate_supply {
            Some(alternate) => estimate(alternate, curve),
            None => "not configured".to_owned(),
        };
        writeln!(out, "Supply Curve 2: {text}")?;
    }
    if display.max_profit_area {
        writeln!(
            out,
            "Max Profit Area: q in [0.00, {:.2}], p in [{:.2}, {:.2}] USD",
            result.profit.quantity, result.marginal_cost, result.profit.price
        )?;
    }

    writeln!(out)?;

    if display.equilibrium {
        writeln!(
            out,
            "Equilibrium Price: {}",
            estimate(&result.equilibrium, |point| format!("{:.2} USD", point.price))
        )?;
        writeln!(
            out,
            "Equilibrium Quantity: {}",
            estimate(&result.equilibrium, |point| format!(
                "{:.2} units",
                point.quantity
            ))
        )?;
    }
    writeln!(out, "Max Profit Available: {:.2} USD", result.profit.profit)?;
    writeln!(out, "Price to Maximize Profit: {:.2} USD", result.profit.price)?;
    writeln!(
        out,
        "Elasticity at Max Profit Quantity: {}",
        estimate(&result.elasticity, |value| format!("{value:.2}"))
    )?;

    Ok(())
}

fn series(observations: &[Observation]) -> String {
    match (observations.first(), observations.last()) {
        (Some(first), Some(last)) => format!(
            "{} points from ({:.2}, {:.2}) to ({:.2}, {:.2})",
            observations.len(),
            first.quantity,
            first.price,
            last.quantity,
            last.price
        ),
        _ => "no points".to_owned(),
    }
}

fn curve(fitted: &FittedCurve) -> String {
    let (start, end) = fitted.endpoints();
    format!(
        "{} from ({:.2}, {:.2}) to ({:.2}, {:.2})",
        fitted.line, start.quantity, start.price, end.quantity, end.price
    )
}

fn estimate<T>(value: &Estimate<T>, render: impl FnOnce(&T) -> String) -> String {
    match value {
        Estimate::Defined(value) => render(value),
        Estimate::Undefined { reason } => format!("undefined ({reason})"),
    }
}
