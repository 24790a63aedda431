use clap::Parser;
use sheetsplit::cli::{self, ConvertOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetsplit")]
#[command(about = "Converter used to convert between different spreadsheet formats")]
#[command(long_about = "sheetsplit - split a multi-sheet spreadsheet into per-sheet files

Loads an .xlsx/.xls/.ods workbook, strips fully blank rows and columns from
every sheet (unless told not to), optionally rewrites cell text so it is safe
to embed in LaTeX, and writes one output file per sheet into the output
directory as <out_dir>/<sheet_name>.<output_format>.

The default csv output is semicolon-delimited and unquoted, sized for a
downstream field split on ';'.

EXAMPLES:
  sheetsplit -i report.xlsx -o out/
  sheetsplit -i report.xlsx -o out/ --latex --print-exported-files
  sheetsplit -i report.ods -o out/ --output-format xlsx --no-filter-empty")]
#[command(version)]
struct Cli {
    /// Path to the input file
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Path to the output directory
    #[arg(short = 'o', long = "out_dir", value_name = "PATH")]
    out_dir: PathBuf,

    /// Skip the blank-row/column filter
    #[arg(long)]
    no_filter_empty: bool,

    /// Print each exported file path to stdout
    #[arg(long)]
    print_exported_files: bool,

    /// The desired output format: csv, tsv or xlsx
    #[arg(long, default_value = "csv")]
    output_format: String,

    /// Escape cell text for LaTeX embedding before export
    #[arg(long)]
    latex: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = ConvertOptions {
        input: cli.input,
        out_dir: cli.out_dir,
        filter_empty: !cli.no_filter_empty,
        latex: cli.latex,
        output_format: cli.output_format,
        print_exported_files: cli.print_exported_files,
    };

    if let Err(e) = cli::convert(&options) {
        cli::report_error(&e.to_string());
        std::process::exit(1);
    }
}
