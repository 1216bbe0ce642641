use census::prelude::*;

fn main() {
    CliApp::new("census")
        .with_args(parse_args)
        .run(run_comparison_report);
}

/// The binary takes no arguments
fn parse_args(args: Vec<String>) -> Result<(), AppError> {
    if args.len() > 1 {
        return Err(AppError::InvalidArguments("Usage: census".to_string()));
    }
    Ok(())
}

/// Time both representations over the default profile count and print the report
fn run_comparison_report(writers: &mut Writers, (): ()) -> Result<(), AppError> {
    let report = run_comparison(&ComparisonConfig::default())?;
    write_report(&ReportRow::from_report(&report), &mut writers.stdout)?;
    Ok(())
}
