use std::process::ExitCode;

use tracing::debug;
use wordfreq_core::{AnalysisResult, analyze};

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::read_input;

pub fn run_analyze(args: AnalyzeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let text = read_input(&args.input, args.stdin)?;
    debug!(bytes = text.len(), input = %args.input, "Read input");

    let result = analyze(&text)?;
    debug!(
        total_words = result.total_words,
        unique_words = result.unique_words,
        "Analyzed input"
    );

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_text(&result)),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total words:  {}\n", result.total_words));
    out.push_str(&format!("Unique words: {}\n", result.unique_words));
    out.push('\n');

    let width = result
        .chart_data
        .iter()
        .map(|entry| entry.word.len())
        .max()
        .unwrap_or(0);
    for (rank, entry) in result.chart_data.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<width$}  {}\n",
            rank + 1,
            entry.word,
            entry.count,
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rendering() {
        let result = analyze("the cat and the hat").unwrap();
        let text = render_text(&result);

        assert_eq!(
            text,
            "Total words:  5\n\
             Unique words: 4\n\
             \n \
             1. the  2\n \
             2. cat  1\n \
             3. and  1\n \
             4. hat  1\n"
        );
    }
}
