use clap::Parser;
use cotizador::{DownPayment, GenerationError, QuoteGenerator, QuoteInput, Term};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Prints a lot sale quote and writes it as a one-page PDF.
#[derive(Parser, Debug)]
#[command(name = "cotizador", version, about)]
struct Cli {
    /// Read the quote from a JSON file; other flags override its fields
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Lot identifier
    #[arg(long)]
    lot: Option<String>,

    /// Lot area in square meters
    #[arg(long)]
    area: Option<f64>,

    /// Base price of the lot
    #[arg(long)]
    price: Option<f64>,

    /// Financing term in years (4 to 10)
    #[arg(long, value_parser = parse_term)]
    years: Option<Term>,

    /// Down payment as a percentage of the base price
    #[arg(long, conflicts_with = "amount")]
    percentage: Option<f64>,

    /// Down payment as an absolute amount; without a value, 7 % of the price
    #[arg(long, num_args = 0..=1, value_name = "AMOUNT")]
    amount: Option<Option<f64>>,

    #[arg(long)]
    client: Option<String>,

    #[arg(long)]
    advisor: Option<String>,

    /// Settings JSON (labels, logo location, page size)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file, or a directory to write the suggested file name into
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Only print the figures, do not render a PDF
    #[arg(long)]
    summary_only: bool,
}

fn parse_term(value: &str) -> Result<Term, String> {
    let years: u32 = value.parse().map_err(|e| format!("{}", e))?;
    Term::new(years).map_err(|e| e.to_string())
}

impl Cli {
    fn quote_input(&self) -> Result<QuoteInput, GenerationError> {
        let mut input = match &self.input {
            Some(path) => {
                let source = fs::read_to_string(path).map_err(|e| {
                    GenerationError::Io(io::Error::new(
                        e.kind(),
                        format!("Failed to read quote from '{}': {}", path.display(), e),
                    ))
                })?;
                serde_json::from_str(&source).map_err(|e| {
                    GenerationError::Validation(format!("'{}': {}", path.display(), e))
                })?
            }
            None => QuoteInput::default(),
        };

        if let Some(lot) = &self.lot {
            input.lot = lot.clone();
        }
        if let Some(area) = self.area {
            input.area_m2 = area;
        }
        if let Some(price) = self.price {
            input.base_price = price;
        }
        if let Some(term) = self.years {
            input.term = term;
        }
        if let Some(pct) = self.percentage {
            input.down_payment = DownPayment::Percentage(pct);
        } else if let Some(amount) = self.amount {
            input.down_payment = match amount {
                Some(amount) => DownPayment::Amount(amount),
                None => DownPayment::default_amount(input.base_price),
            };
        }
        if let Some(client) = &self.client {
            input.client = client.clone();
        }
        if let Some(advisor) = &self.advisor {
            input.advisor = advisor.clone();
        }
        Ok(input)
    }
}

fn main() -> Result<(), GenerationError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = QuoteGenerator::builder();
    if let Some(path) = &cli.config {
        builder = builder.with_settings_file(path)?;
    }
    let generator = builder.build()?;
    let input = cli.quote_input()?;

    println!("{}", generator.summarize(&input)?);
    if cli.summary_only {
        return Ok(());
    }

    let document = generator.generate(&input)?;
    let path = match &cli.output {
        Some(path) if !path.is_dir() => {
            fs::write(path, &document.bytes)?;
            path.clone()
        }
        Some(dir) => document.save_in(dir)?,
        None => document.save_in(".")?,
    };
    println!("\nSaved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_from(args: &[&str]) -> QuoteInput {
        let cli = Cli::try_parse_from(std::iter::once("cotizador").chain(args.iter().copied())).unwrap();
        cli.quote_input().unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let input = input_from(&["--lot", "A-3", "--price", "120000", "--years", "6", "--client", "Ana"]);
        assert_eq!(input.lot, "A-3");
        assert_eq!(input.base_price, 120_000.0);
        assert_eq!(input.term.years(), 6);
        assert_eq!(input.client, "Ana");
        assert_eq!(input.down_payment, DownPayment::Percentage(7.0));
    }

    #[test]
    fn test_bare_amount_flag_uses_default_amount() {
        let input = input_from(&["--price", "1000", "--amount"]);
        assert_eq!(input.down_payment, DownPayment::default_amount(1_000.0));

        let explicit = input_from(&["--price", "1000", "--amount", "250"]);
        assert_eq!(explicit.down_payment, DownPayment::Amount(250.0));
    }

    #[test]
    fn test_percentage_and_amount_conflict() {
        let result = Cli::try_parse_from(["cotizador", "--percentage", "10", "--amount", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_term_is_rejected() {
        assert!(Cli::try_parse_from(["cotizador", "--years", "3"]).is_err());
    }
}
