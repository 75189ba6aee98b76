use anyhow::{Context, Result};
use btc_size_fee::utils::logging;
use btc_size_fee::{
    calc_tx_size_with, estimate_fee_for, format_fee_range, log_debug, log_error, ApiResponse,
    EstimationOptions, ScriptType, TxSizeResult,
};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Estimate the size, weight and fee of a Bitcoin transaction
#[derive(Parser, Debug)]
#[command(name = "btc-size-fee", version)]
struct Cli {
    /// JSON options file ("-" reads stdin); flags override its values
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    #[arg(long)]
    input_count: Option<u32>,

    /// P2PKH, P2SH, P2SH-P2WPKH, P2SH-P2WSH, P2WPKH, P2WSH or P2TR
    #[arg(long)]
    input_script: Option<ScriptType>,

    /// Signatures required (multisig inputs)
    #[arg(long)]
    input_m: Option<u32>,

    /// Public keys (multisig inputs)
    #[arg(long)]
    input_n: Option<u32>,

    #[arg(long)]
    p2pkh_output_count: Option<u32>,

    #[arg(long)]
    p2sh_output_count: Option<u32>,

    #[arg(long)]
    p2sh_p2wpkh_output_count: Option<u32>,

    #[arg(long)]
    p2sh_p2wsh_output_count: Option<u32>,

    #[arg(long)]
    p2wpkh_output_count: Option<u32>,

    #[arg(long)]
    p2wsh_output_count: Option<u32>,

    #[arg(long)]
    p2tr_output_count: Option<u32>,

    /// Fee rate in sat/vB
    #[arg(long, allow_negative_numbers = true)]
    fee_rate: Option<f64>,

    /// Print a fee range of fee +/- fee * MULTIPLIER
    #[arg(long, value_name = "MULTIPLIER", requires = "fee_rate", allow_negative_numbers = true)]
    range_multiplier: Option<f64>,

    /// Print a single JSON response
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn flag_options(&self) -> EstimationOptions {
        EstimationOptions {
            input_count: self.input_count,
            input_script: self.input_script,
            input_m: self.input_m,
            input_n: self.input_n,
            p2pkh_output_count: self.p2pkh_output_count,
            p2sh_output_count: self.p2sh_output_count,
            p2sh_p2wpkh_output_count: self.p2sh_p2wpkh_output_count,
            p2sh_p2wsh_output_count: self.p2sh_p2wsh_output_count,
            p2wpkh_output_count: self.p2wpkh_output_count,
            p2wsh_output_count: self.p2wsh_output_count,
            p2tr_output_count: self.p2tr_output_count,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    #[serde(flatten)]
    size: TxSizeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    fee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fee_range: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        logging::enable_debug();
    }

    match run(&cli) {
        Ok(report) => {
            if cli.json {
                println!("{}", ApiResponse::ok(report).to_json());
            } else {
                print_report(&report);
            }
            Ok(())
        }
        Err(e) if cli.json => {
            log_error!("cli", "Estimation failed", error = format!("{:#}", e));
            let error = match e.downcast::<btc_size_fee::EstimatorError>() {
                Ok(estimator_error) => estimator_error,
                Err(other) => btc_size_fee::EstimatorError::internal(format!("{:#}", other)),
            };
            println!("{}", ApiResponse::<()>::err(error).to_json());
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

fn run(cli: &Cli) -> Result<Report> {
    let base = match &cli.options {
        Some(path) => EstimationOptions::from_json_str(&read_options(path)?)?,
        None => EstimationOptions::new(),
    };
    let options = base.merge(&cli.flag_options());

    let size = calc_tx_size_with(Some(&options))?;

    let fee = cli
        .fee_rate
        .map(|rate| estimate_fee_for(&size, rate))
        .transpose()?;

    let fee_range = match (fee, cli.range_multiplier) {
        (Some(fee), Some(multiplier)) => Some(format_fee_range(fee as f64, multiplier)?),
        _ => None,
    };

    log_debug!(
        "cli",
        "Estimate complete",
        vbytes = size.tx_vbytes,
        weight = size.tx_weight.to_wu(),
    );

    Ok(Report { size, fee, fee_range })
}

fn read_options(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading options from {}", path.display()))
    }
}

fn print_report(report: &Report) {
    println!("txVBytes: {}", report.size.tx_vbytes);
    println!("txBytes:  {}", report.size.tx_bytes);
    println!("txWeight: {}", report.size.tx_weight.to_wu());
    if let Some(fee) = report.fee {
        println!("fee:      {} sat", fee);
    }
    if let Some(range) = &report.fee_range {
        println!("range:    {} sat", range);
    }
}
