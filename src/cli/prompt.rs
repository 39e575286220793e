//! Interactive filter collection
//!
//! Prompts the user for the optional region/amount filter, mirroring
//! the flag-based parameters. Before the questions, the regions and
//! amount range observed in a preview validation pass over the
//! unfiltered data are shown as guidance. Unparseable amounts are
//! treated as "no bound" after a warning rather than aborting the run.

use crate::core::report::money;
use crate::core::validator::{FilterParams, FilterSummary};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Prompt on stdin/stdout for filter parameters
///
/// `preview` comes from an unfiltered validation pass over the input;
/// its region set and amount range are displayed before the questions.
pub fn collect_filter_params(preview: &FilterSummary) -> FilterParams {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    collect_from(&mut input, &mut output, preview)
}

/// Prompt for filter parameters over arbitrary reader/writer pairs
///
/// Separated from the stdin/stdout wiring so the dialogue is testable.
fn collect_from(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    preview: &FilterSummary,
) -> FilterParams {
    print_filter_options(output, preview);

    let apply = ask(input, output, "Do you want to filter data? (y/n): ");
    if !apply.eq_ignore_ascii_case("y") {
        return FilterParams::default();
    }

    let region = ask(input, output, "Enter region (or press Enter to skip): ");
    let region = (!region.is_empty()).then_some(region);

    let min_amount = ask_amount(
        input,
        output,
        "Enter minimum transaction amount (or press Enter to skip): ",
    );
    let max_amount = ask_amount(
        input,
        output,
        "Enter maximum transaction amount (or press Enter to skip): ",
    );

    FilterParams {
        region,
        min_amount,
        max_amount,
    }
}

/// Show what the unfiltered valid data offers before asking
fn print_filter_options(output: &mut dyn Write, preview: &FilterSummary) {
    let regions: Vec<&str> = preview.regions.iter().map(|s| s.as_str()).collect();
    let _ = writeln!(output, "Filter options available:");
    let _ = writeln!(output, "Regions: {}", regions.join(", "));
    match preview.amount_range {
        Some((min, max)) => {
            let _ = writeln!(output, "Amount range: {} to {}", money(min), money(max));
        }
        None => {
            let _ = writeln!(output, "Amount range: N/A");
        }
    }
}

/// Write a prompt and read one trimmed line
fn ask(input: &mut dyn BufRead, output: &mut dyn Write, prompt: &str) -> String {
    let _ = write!(output, "{prompt}");
    let _ = output.flush();

    let mut line = String::new();
    let _ = input.read_line(&mut line);
    line.trim().to_string()
}

/// Prompt for an optional amount; unparseable input counts as skipped
fn ask_amount(input: &mut dyn BufRead, output: &mut dyn Write, prompt: &str) -> Option<Decimal> {
    let answer = ask(input, output, prompt);
    if answer.is_empty() {
        return None;
    }
    match Decimal::from_str(&answer) {
        Ok(amount) => Some(amount),
        Err(_) => {
            eprintln!("Ignoring unparseable amount '{answer}'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(regions: &[&str], range: Option<(&str, &str)>) -> FilterSummary {
        FilterSummary {
            total_input: 0,
            invalid: 0,
            filtered_by_region: 0,
            filtered_by_amount: 0,
            final_count: 0,
            regions: regions.iter().map(|r| r.to_string()).collect(),
            amount_range: range.map(|(min, max)| {
                (
                    Decimal::from_str(min).unwrap(),
                    Decimal::from_str(max).unwrap(),
                )
            }),
        }
    }

    fn run_dialogue(answers: &str, preview: &FilterSummary) -> (FilterParams, String) {
        let mut input = answers.as_bytes();
        let mut output = Vec::new();
        let params = collect_from(&mut input, &mut output, preview);
        (params, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_declining_filter_returns_defaults() {
        let (params, _) = run_dialogue("n\n", &preview(&[], None));
        assert!(params.is_empty());
    }

    #[test]
    fn test_full_dialogue() {
        let (params, _) = run_dialogue("y\nNorth\n10.00\n500\n", &preview(&["North"], None));

        assert_eq!(params.region.as_deref(), Some("North"));
        assert_eq!(params.min_amount, Some(Decimal::from_str("10.00").unwrap()));
        assert_eq!(params.max_amount, Some(Decimal::from(500)));
    }

    #[test]
    fn test_blank_answers_skip_each_filter() {
        let (params, _) = run_dialogue("y\n\n\n\n", &preview(&[], None));
        assert!(params.is_empty());
    }

    #[test]
    fn test_unparseable_amount_is_skipped() {
        let (params, _) = run_dialogue("y\n\nlots\n\n", &preview(&[], None));
        assert_eq!(params.min_amount, None);
    }

    #[test]
    fn test_uppercase_yes_is_accepted() {
        let (params, _) = run_dialogue("Y\nWest\n\n\n", &preview(&[], None));
        assert_eq!(params.region.as_deref(), Some("West"));
    }

    #[test]
    fn test_guidance_shown_before_questions() {
        let (_, output) = run_dialogue(
            "n\n",
            &preview(&["North", "South"], Some(("30.00", "1050.75"))),
        );

        assert!(output.contains("Regions: North, South"));
        assert!(output.contains("Amount range: 30.00 to 1,050.75"));
        let guidance = output.find("Filter options available:").unwrap();
        let question = output.find("Do you want to filter data?").unwrap();
        assert!(guidance < question);
    }

    #[test]
    fn test_guidance_with_no_valid_records() {
        let (_, output) = run_dialogue("n\n", &preview(&[], None));
        assert!(output.contains("Amount range: N/A"));
    }
}
