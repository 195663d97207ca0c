//! Application entry point and dispatch.

use std::cmp::Ordering;
use std::time::Instant;

use anyhow::{Context, Result};

use mtmath_cli::output::emit;
use mtmath_cli::presenter::{CliResultPresenter, Evaluation, NamedValue, ResultPresenter};
use mtmath_core::{BigInt, Options, Rational};

use crate::config::{AppConfig, Command, IntOp, RationalOp};
use crate::operand::{parse_int, parse_rational};
use crate::{probe, version};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    tracing::debug!(version = %version::full_version(), "starting");

    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        mtmath_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let Some(command) = &config.command else {
        anyhow::bail!("no command given; see `mtmath --help`");
    };

    let opts = config.options();
    let evaluation = match command {
        Command::Int { op, left, right } => evaluate_int(*op, left, right, &opts)?,
        Command::Rational { op, left, right } => evaluate_rational(*op, left, right, &opts)?,
        Command::Convert { value, to } => convert(value, *to)?,
        Command::Probe { library } => return run_probe(config, library.as_deref()),
    };

    let presenter = CliResultPresenter::new(config.verbose, config.quiet, config.json);
    let mut buf = Vec::new();
    presenter.present_result(&evaluation, &mut buf)?;
    emit(config.output.as_deref(), &buf).context("failed to write output")?;
    Ok(())
}

fn ordering_text(ordering: Option<Ordering>) -> &'static str {
    match ordering {
        Some(Ordering::Less) => "-1",
        Some(Ordering::Equal) => "0",
        Some(Ordering::Greater) => "1",
        None => "unordered",
    }
}

fn evaluate_int(op: IntOp, left: &str, right: &str, opts: &Options) -> Result<Evaluation> {
    let start = Instant::now();
    let l = parse_int(left).with_context(|| format!("invalid integer operand {left:?}"))?;
    let r = parse_int(right).with_context(|| format!("invalid integer operand {right:?}"))?;
    tracing::debug!(?op, left_bits = l.bits(), right_bits = r.bits(), "integer operation");

    let render = |value: &BigInt| value.to_str_radix(opts.output_radix);
    let results = match op {
        IntOp::Add => vec![NamedValue::new("result", render(&(&l + &r))?)],
        IntOp::Sub => vec![NamedValue::new("result", render(&(&l - &r))?)],
        IntOp::Mul => vec![NamedValue::new("result", render(&l.mul_with_options(&r, opts))?)],
        IntOp::Div => {
            let (q, _) = l.checked_div_rem(&r)?;
            vec![NamedValue::new("result", render(&q)?)]
        }
        IntOp::Rem => {
            let (_, rem) = l.checked_div_rem(&r)?;
            vec![NamedValue::new("result", render(&rem)?)]
        }
        IntOp::Divrem => {
            let (q, rem) = l.checked_div_rem(&r)?;
            vec![
                NamedValue::new("quotient", render(&q)?),
                NamedValue::new("remainder", render(&rem)?),
            ]
        }
        IntOp::Cmp => vec![NamedValue::new("result", ordering_text(Some(l.cmp(&r))))],
        IntOp::Pow => {
            let exponent = u32::try_from(&r).context("exponent must fit in u32")?;
            vec![NamedValue::new("result", render(&l.pow(exponent))?)]
        }
    };

    Ok(Evaluation {
        operation: format!("int {}", op_name(op)),
        operands: vec![left.to_string(), right.to_string()],
        results,
        duration: start.elapsed(),
    })
}

fn render_rational(value: &Rational, radix: u32) -> Result<String> {
    Ok(format!(
        "{}/{}",
        value.numer().to_str_radix(radix)?,
        value.denom().to_str_radix(radix)?
    ))
}

fn evaluate_rational(
    op: RationalOp,
    left: &str,
    right: &str,
    opts: &Options,
) -> Result<Evaluation> {
    let start = Instant::now();
    let l = parse_rational(left).with_context(|| format!("invalid rational operand {left:?}"))?;
    let r = parse_rational(right).with_context(|| format!("invalid rational operand {right:?}"))?;
    tracing::debug!(?op, "rational operation");

    let value = match op {
        RationalOp::Add => &l + &r,
        RationalOp::Sub => &l - &r,
        RationalOp::Mul => &l * &r,
        RationalOp::Div => &l / &r,
        RationalOp::Cmp => {
            return Ok(Evaluation {
                operation: "rational cmp".to_string(),
                operands: vec![left.to_string(), right.to_string()],
                results: vec![NamedValue::new("result", ordering_text(l.partial_cmp(&r)))],
                duration: start.elapsed(),
            });
        }
    };

    Ok(Evaluation {
        operation: format!("rational {}", rational_op_name(op)),
        operands: vec![left.to_string(), right.to_string()],
        results: vec![NamedValue::new(
            "result",
            render_rational(&value, opts.output_radix)?,
        )],
        duration: start.elapsed(),
    })
}

fn convert(value: &str, radix: u32) -> Result<Evaluation> {
    let start = Instant::now();
    let parsed = parse_int(value).with_context(|| format!("invalid integer operand {value:?}"))?;
    Ok(Evaluation {
        operation: format!("convert to radix {radix}"),
        operands: vec![value.to_string()],
        results: vec![NamedValue::new("result", parsed.to_str_radix(radix)?)],
        duration: start.elapsed(),
    })
}

fn run_probe(config: &AppConfig, library: Option<&std::path::Path>) -> Result<()> {
    let report = probe::run(library)?;
    let text = report.render(config.json)?;
    emit(config.output.as_deref(), text.as_bytes()).context("failed to write output")?;
    Ok(())
}

fn op_name(op: IntOp) -> &'static str {
    match op {
        IntOp::Add => "add",
        IntOp::Sub => "sub",
        IntOp::Mul => "mul",
        IntOp::Div => "div",
        IntOp::Rem => "rem",
        IntOp::Divrem => "divrem",
        IntOp::Cmp => "cmp",
        IntOp::Pow => "pow",
    }
}

fn rational_op_name(op: RationalOp) -> &'static str {
    match op {
        RationalOp::Add => "add",
        RationalOp::Sub => "sub",
        RationalOp::Mul => "mul",
        RationalOp::Div => "div",
        RationalOp::Cmp => "cmp",
    }
}
